use framegif::progress::ProgressReporter;
use std::io::Stdout;
use std::path::Path;

/// Prints a line for each frame file and one when the GIF is done
pub struct FileLines {}

impl ProgressReporter for FileLines {
    fn increase(&mut self) -> bool {
        true
    }

    fn processing(&mut self, frame_path: &Path) {
        let name = frame_path.file_name().unwrap_or(frame_path.as_os_str());
        println!("Processing File: {}", name.to_string_lossy());
    }

    fn error(&mut self, message: String) {
        eprintln!("warning: {}", message);
    }

    fn done(&mut self, msg: &str) {
        println!("{}", msg);
    }
}

/// Progress bar counting written frames
pub struct ProgressBar(pbr::ProgressBar<Stdout>);

impl ProgressBar {
    pub fn new(total_frames: u64) -> Self {
        let mut pb = pbr::ProgressBar::new(total_frames);
        pb.show_speed = false;
        pb.show_percent = false;
        pb.format(" #_. ");
        pb.message("Frame ");
        pb.set_max_refresh_rate(Some(std::time::Duration::from_millis(250)));
        Self(pb)
    }
}

impl ProgressReporter for ProgressBar {
    fn increase(&mut self) -> bool {
        self.0.inc();
        true
    }

    fn error(&mut self, message: String) {
        eprintln!("\nwarning: {}", message);
    }

    fn done(&mut self, msg: &str) {
        self.0.finish_print(msg);
    }
}
