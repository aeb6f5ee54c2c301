use courier_optimizer::cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::run()
}
