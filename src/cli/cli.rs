use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, help = "Analysis request JSON file; a built-in demo request is used when omitted")]
    request: Option<String>,

    #[arg(short, long, default_value = "results")]
    output_dir: String,

    #[arg(long, default_value_t = false)]
    enable_csv_export: bool,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,

    #[arg(short = 'd', long, help = "Override the simulated horizon in days")]
    simulation_days: Option<usize>,

    #[arg(long, default_value_t = false, help = "Emit the full result as JSON instead of the text report")]
    json: bool,
}

impl Args {
    pub fn request(&self) -> Option<&str> {
        self.request.as_deref()
    }

    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    pub fn enable_csv_export(&self) -> bool {
        self.enable_csv_export
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }

    pub fn simulation_days(&self) -> Option<usize> {
        self.simulation_days
    }

    pub fn json(&self) -> bool {
        self.json
    }
}
