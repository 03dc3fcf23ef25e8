use super::*;

const CONTROL_FIELDS: [&str; 8] = [
    "nametable_1",
    "nametable_2",
    "vram_address_increment",
    "sprite_pattern_address",
    "background_pattern_address",
    "sprite_size",
    "master_slave_select",
    "generate_vblank_nmi",
];

fn fields(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn control_def() -> RegisterDef {
    RegisterDef::builder()
        .name("ControlRegister")
        .fields(fields(&CONTROL_FIELDS))
        .build()
}

#[test]
fn emits_struct_with_fields_in_bit_order() {
    let src = generate(&control_def()).unwrap();
    assert!(src.contains("pub struct ControlRegister {"));

    let positions: Vec<usize> = CONTROL_FIELDS
        .iter()
        .map(|f| src.find(&format!("pub {}: bool,", f)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn emits_contract_and_conversions() {
    let src = generate(&control_def()).unwrap();
    assert!(src.contains("impl FlagRegister for ControlRegister {"));
    assert!(src.contains("const NAME: &'static str = \"ControlRegister\";"));
    assert!(src.contains("impl From<u8> for ControlRegister {"));
    assert!(src.contains("impl From<ControlRegister> for u8 {"));
    assert!(src.contains("Self::from_flags(bits::decode(byte))"));
    assert!(src.contains("            self.generate_vblank_nmi,\n        ]"));
}

#[test]
fn wrong_field_count_is_reported() {
    for count in [0, 7, 9] {
        let names: Vec<String> = (0..count).map(|i| format!("f{}", i)).collect();
        let def = RegisterDef::builder().name("Short").fields(names).build();
        assert_eq!(
            generate(&def),
            Err(CodegenError::FieldCount {
                register: "Short".to_string(),
                found: count,
            })
        );
    }
}

#[test]
fn invalid_identifiers_are_reported() {
    let def = RegisterDef::builder()
        .name("Bad Name")
        .fields(fields(&CONTROL_FIELDS))
        .build();
    assert_eq!(
        validate(&def),
        Err(CodegenError::InvalidIdent("Bad Name".to_string()))
    );

    let mut names = fields(&CONTROL_FIELDS);
    names[3] = "sprite-pattern".to_string();
    let def = RegisterDef::builder().name("Ctrl").fields(names).build();
    assert_eq!(
        validate(&def),
        Err(CodegenError::InvalidIdent("sprite-pattern".to_string()))
    );
}

#[test]
fn reserved_words_are_not_field_names() {
    for word in ["try", "abstract", "box", "yield", "macro", "final"] {
        let mut names = fields(&CONTROL_FIELDS);
        names[0] = word.to_string();
        let def = RegisterDef::builder().name("Ctrl").fields(names).build();
        assert_eq!(
            generate(&def),
            Err(CodegenError::InvalidIdent(word.to_string()))
        );
    }
}

#[test]
fn type_name_cannot_clash_with_generated_imports() {
    for name in ["Flags", "FlagRegister", "bits", "FLAG_COUNT"] {
        let def = RegisterDef::builder()
            .name(name)
            .fields(fields(&CONTROL_FIELDS))
            .build();
        assert_eq!(
            generate(&def),
            Err(CodegenError::InvalidIdent(name.to_string()))
        );
    }
}

#[test]
fn control_output_matches_hand_written_layout() {
    let expected = r#"use ppureg_common::{bits, FlagRegister, Flags, FLAG_COUNT};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlRegister {
    pub nametable_1: bool,
    pub nametable_2: bool,
    pub vram_address_increment: bool,
    pub sprite_pattern_address: bool,
    pub background_pattern_address: bool,
    pub sprite_size: bool,
    pub master_slave_select: bool,
    pub generate_vblank_nmi: bool,
}

impl FlagRegister for ControlRegister {
    const NAME: &'static str = "ControlRegister";

    const FIELDS: [&'static str; FLAG_COUNT] = [
        "nametable_1",
        "nametable_2",
        "vram_address_increment",
        "sprite_pattern_address",
        "background_pattern_address",
        "sprite_size",
        "master_slave_select",
        "generate_vblank_nmi",
    ];

    fn flags(&self) -> Flags {
        [
            self.nametable_1,
            self.nametable_2,
            self.vram_address_increment,
            self.sprite_pattern_address,
            self.background_pattern_address,
            self.sprite_size,
            self.master_slave_select,
            self.generate_vblank_nmi,
        ]
    }

    fn from_flags(flags: Flags) -> Self {
        let [
            nametable_1,
            nametable_2,
            vram_address_increment,
            sprite_pattern_address,
            background_pattern_address,
            sprite_size,
            master_slave_select,
            generate_vblank_nmi,
        ] = flags;
        Self {
            nametable_1,
            nametable_2,
            vram_address_increment,
            sprite_pattern_address,
            background_pattern_address,
            sprite_size,
            master_slave_select,
            generate_vblank_nmi,
        }
    }
}

impl From<u8> for ControlRegister {
    fn from(byte: u8) -> Self {
        Self::from_flags(bits::decode(byte))
    }
}

impl From<ControlRegister> for u8 {
    fn from(reg: ControlRegister) -> Self {
        reg.bits()
    }
}
"#;
    assert_eq!(generate(&control_def()).unwrap(), expected);
}

#[test]
fn duplicate_field_names_are_not_rejected() {
    let def = RegisterDef::builder()
        .name("Dup")
        .fields(fields(&["a"; 8]))
        .build();
    assert!(generate(&def).is_ok());
}

#[test]
fn doc_and_visibility() {
    let def = RegisterDef::builder()
        .name("StatusRegister")
        .fields(fields(&CONTROL_FIELDS))
        .doc("PPUSTATUS\n\nRead clears vblank.")
        .visibility(Visibility::Crate)
        .build();
    let src = generate(&def).unwrap();
    assert!(src.contains("/// PPUSTATUS\n///\n/// Read clears vblank.\n#[derive("));
    assert!(src.contains("pub(crate) struct StatusRegister {"));
    assert!(src.contains("    pub(crate) nametable_1: bool,"));
}

#[test]
fn error_messages() {
    let err = CodegenError::FieldCount {
        register: "X".to_string(),
        found: 3,
    };
    assert_eq!(
        err.to_string(),
        "register 'X' needs exactly 8 field names, got 3"
    );
}
