const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "macro",
    "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Names the generated source already binds at module level or uses as
/// field types.
const TAKEN_TYPE_NAMES: &[&str] = &["bits", "FlagRegister", "Flags", "FLAG_COUNT", "bool", "u8"];

/// Plain (non-raw) identifier that is not `_` and not a keyword.
pub(crate) fn is_valid(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return false;
    }
    name != "_" && !KEYWORDS.contains(&name)
}

/// Like [`is_valid`], and also free in the generated module's namespace.
pub(crate) fn is_valid_type_name(name: &str) -> bool {
    is_valid(name) && !TAKEN_TYPE_NAMES.contains(&name)
}
