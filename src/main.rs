use std::env;
use std::process;

use drumgen::render;
use drumgen::synth_config::SynthConfig;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(r#"Usage: drumgen "/abs/to/out_dir" ["/abs/to/settings.json"]"#);
        process::exit(1);
    }

    let mut config = if args.len() > 2 {
        match SynthConfig::from_settings_file(&args[2]) {
            Ok(config) => config,
            Err(msg) => {
                eprintln!("{}", msg);
                process::exit(1);
            }
        }
    } else {
        SynthConfig::default()
    };
    config.out_dir = args[1].clone();

    match render::render_batch(&config) {
        Ok(_) => {
            println!("{}", config.out_dir)
        }
        Err(msg) => {
            eprintln!("Problem while rendering batch: {}", msg);
            process::exit(1);
        }
    }
}
