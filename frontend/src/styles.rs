//! Process-wide stylesheet registration.
//!
//! The app's base styles are appended to `<head>` exactly once, during
//! startup, guarded by an initialized-once flag rather than DOM inspection.
//! Components never inject styles on mount.

use std::sync::atomic::{AtomicBool, Ordering};

static REGISTERED: AtomicBool = AtomicBool::new(false);

const STYLE_SHEET: &str = r#"
body { margin: 0; font-family: 'Segoe UI', Arial, sans-serif; background: #f4f5f7; color: #222; }
.page { max-width: 960px; margin: 0 auto; padding: 24px; }
.banner { background: #fdecea; color: #b3261e; border: 1px solid #f5c6c0; border-radius: 4px; padding: 10px 14px; margin: 12px 0; display: flex; justify-content: space-between; }
.toolbar { display: flex; gap: 8px; align-items: center; margin-bottom: 16px; }
.toolbar .spacer { flex: 1; }
button { cursor: pointer; border: 1px solid #ccc; background: #fff; border-radius: 4px; padding: 6px 12px; }
button.primary { background: #1a73e8; border-color: #1a73e8; color: #fff; }
button.danger { background: #e53935; border-color: #e53935; color: #fff; }
input, textarea, select { font: inherit; padding: 6px 8px; border: 1px solid #ccc; border-radius: 4px; }
.resume-table { width: 100%; border-collapse: collapse; background: #fff; }
.resume-table th, .resume-table td { text-align: left; padding: 10px 12px; border-bottom: 1px solid #eee; }
.field-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 10px; background: #fff; padding: 16px; border-radius: 4px; }
.section { background: #fff; border-radius: 4px; padding: 16px; margin-top: 16px; }
.section h3 { margin: 0 0 10px; }
.entry { border: 1px solid #eee; border-radius: 4px; padding: 10px; margin-bottom: 10px; display: grid; gap: 8px; }
.entry-row { display: flex; gap: 8px; }
.entry-row > * { flex: 1; }
.dots button { width: 26px; height: 26px; border-radius: 50%; padding: 0; }
.dots button.filled { background: #1a73e8; border-color: #1a73e8; color: #fff; }
.top-sheet { position: fixed; inset: 0 0 auto 0; transform: translateY(-110%); transition: transform 0.25s ease; background: #fff; box-shadow: 0 4px 16px rgba(0,0,0,0.2); padding: 24px; z-index: 1000; }
.top-sheet.show { transform: translateY(0); }
.toast { position: fixed; bottom: 20px; left: 50%; transform: translateX(-50%); background: rgba(0,0,0,0.8); color: #fff; padding: 10px 20px; border-radius: 4px; z-index: 10000; }
body.printing .toolbar, body.printing .top-sheet, body.printing .toast, body.printing .entry-controls { display: none; }
@media print { .toolbar, .top-sheet, .toast, .entry-controls { display: none !important; } }
"#;

/// Appends the app stylesheet to the document head. Safe to call more than
/// once; only the first call has an effect.
pub fn register() {
    if REGISTERED.swap(true, Ordering::SeqCst) {
        return;
    }
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    if let (Ok(style), Some(head)) = (document.create_element("style"), document.head()) {
        style.set_text_content(Some(STYLE_SHEET));
        head.append_child(&style).ok();
    }
}
