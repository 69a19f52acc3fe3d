use std::sync::atomic::{AtomicBool, Ordering};

static QUIET_MODE: AtomicBool = AtomicBool::new(false);
static VERBOSE_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_quiet_mode(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
}

pub fn set_verbose_mode(verbose: bool) {
    VERBOSE_MODE.store(verbose, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

pub fn is_verbose() -> bool {
    VERBOSE_MODE.load(Ordering::Relaxed)
}

/// Red `ERROR` marker, plain when stderr is not a terminal.
pub fn error_marker() -> console::StyledObject<&'static str> {
    console::style(crate::constants::ERROR_MARKER).red().for_stderr()
}

/// Yellow `WARN` marker, plain when stderr is not a terminal.
pub fn warn_marker() -> console::StyledObject<&'static str> {
    console::style(crate::constants::WARN_MARKER).yellow().for_stderr()
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if !$crate::logger::is_quiet() {
            println!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose() && !$crate::logger::is_quiet() {
            println!("DEBUG {}", format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        eprintln!("{} {}", $crate::logger::error_marker(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        if !$crate::logger::is_quiet() {
            eprintln!("{} {}", $crate::logger::warn_marker(), format!($($arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_render_plain_text_without_terminal() {
        console::set_colors_enabled_stderr(false);
        assert_eq!(error_marker().to_string(), "ERROR");
        assert_eq!(warn_marker().to_string(), "WARN");
    }
}
