use poe::cli::{run, ValidationError};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    #[cfg(windows)]
    let _ = enable_ansi_support::enable_ansi_support();

    if let Err(e) = run() {
        // Validation failures are user errors; everything else is internal
        if let Some(validation) = e.downcast_ref::<ValidationError>() {
            eprintln!("Error: {}", validation);
            std::process::exit(1);
        }

        eprintln!("Internal error: {}", e);
        let mut source = e.source();
        if source.is_some() {
            eprintln!("\nCaused by:");
            let mut indent = 1;
            while let Some(err) = source {
                eprintln!("{:indent$}  {}", "", err);
                source = err.source();
                indent += 1;
            }
        }
        std::process::exit(2);
    }
}
