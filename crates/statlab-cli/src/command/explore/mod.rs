use crate::command::DataArg;

use self::app::App;

mod app;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ExploreArg {
    #[clap(flatten)]
    data: DataArg,
}

pub(crate) fn run(arg: &ExploreArg) -> anyhow::Result<()> {
    let (data, sample) = arg.data.resolve()?;
    let mut app = App::new(data, sample, arg.data.variance_kind());
    ratatui::run(|terminal| app.run(terminal))?;
    Ok(())
}
