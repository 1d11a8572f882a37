mod command;
mod input;
mod samples;
mod ui;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
