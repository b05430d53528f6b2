// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "obj-viewer")]
#[command(about = "OBJ model viewer with a free-fly camera", long_about = None)]
pub struct Cli {
    /// Path to the OBJ model to display
    #[arg(default_value = "models/mill/Mill.obj")]
    pub model: String,

    /// Initial window width in logical pixels
    #[arg(long, default_value = "1024")]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value = "1024")]
    pub height: u32,

    /// Disable the debug GUI overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
