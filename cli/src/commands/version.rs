//! Version command

/// Run the version command.
pub fn run() {
    println!("asus-touchpad-installer {}", env!("CARGO_PKG_VERSION"));
}
