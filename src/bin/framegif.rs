use clap::{crate_name, crate_version, App, AppSettings, Arg};
use framegif::progress::{NoProgress, ProgressReporter};
use framegif::{Config, FrameList};

mod reporter;
use crate::reporter::{FileLines, ProgressBar};

use std::path::Path;
use std::process;

pub type BinResult<T, E = Box<dyn std::error::Error + Send + Sync>> = Result<T, E>;

fn main() {
    if let Err(e) = bin_main() {
        eprintln!("error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }
}

fn bin_main() -> BinResult<()> {
    let defaults = Config::default();
    let default_dir = defaults.source_dir.to_string_lossy().into_owned();
    let default_output = defaults.output_path.to_string_lossy().into_owned();

    let matches = App::new(crate_name!())
        .version(crate_version!())
        .about("Turns numbered PNG frames (0.png, 1.png, …) into a looping GIF")
        .setting(AppSettings::UnifiedHelpMessage)
        .setting(AppSettings::DeriveDisplayOrder)
        .arg(Arg::with_name("output")
            .long("output")
            .short("o")
            .help("Destination file to write to")
            .empty_values(false)
            .takes_value(true)
            .value_name("a.gif")
            .default_value(&default_output))
        .arg(Arg::with_name("quiet")
            .long("quiet")
            .short("q")
            .conflicts_with("progress")
            .help("Print nothing but errors"))
        .arg(Arg::with_name("progress")
            .long("progress")
            .help("Show a progress bar instead of a line per frame"))
        .arg(Arg::with_name("FRAMES_DIR")
            .help("Directory with numbered PNG frames")
            .empty_values(false)
            .default_value(&default_dir))
        .get_matches_from(wild::args_os());

    let config = Config {
        source_dir: dunce::simplified(Path::new(matches.value_of_os("FRAMES_DIR").ok_or("Missing frames directory")?)).to_owned(),
        output_path: dunce::simplified(Path::new(matches.value_of_os("output").ok_or("Missing output")?)).to_owned(),
        ..defaults
    };

    // listed up front so the progress bar knows the total
    let frames = FrameList::scan(&config.source_dir, &config.suffix, config.order)?;

    let mut progress: Box<dyn ProgressReporter> = if matches.is_present("quiet") {
        Box::new(NoProgress {})
    } else if matches.is_present("progress") {
        Box::new(ProgressBar::new(frames.len() as u64))
    } else {
        Box::new(FileLines {})
    };

    framegif::assemble_frames(&frames, &config.output_path, config.settings, &mut *progress)?;
    Ok(())
}
