use clap::Parser;
use copy_assets::AppError;

#[derive(Parser)]
#[command(name = "copy-assets")]
#[command(version)]
#[command(
    about = "Copy static CSS and HTML template assets into public/",
    long_about = None
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    let result: Result<(), AppError> = copy_assets::run().map(|_| ());

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
