use ppureg::{Command, Radix};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let command = Command::from_args(std::env::args().skip(1))?;
    let radix = Radix::from_env();
    log::debug!("Running {:?} with {:?} output", command, radix);

    print!("{}", ppureg::run(command, radix)?);
    Ok(())
}
