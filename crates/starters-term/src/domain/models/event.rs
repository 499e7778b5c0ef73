#[derive(Debug)]
pub enum Event {
    KeyboardCTRLC,
    KeyboardEnter,
    KeyboardQuit,
    MouseLeftClick(u16, u16),
    UICursorDown,
    UICursorUp,
    UITick,
}
