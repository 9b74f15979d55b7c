//! Terminal setup and restore helpers

/// Install a panic hook that restores the terminal before printing the panic.
///
/// Without this, a panic inside the draw loop leaves the terminal in raw
/// mode with the alternate screen active.
pub fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        hook(info);
    }));
}
