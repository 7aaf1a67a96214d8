//! Win32 message boxes via `MessageBoxW`.

use windows::core::{HSTRING, PCWSTR};
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    MessageBoxW, IDCANCEL, MB_ICONINFORMATION, MB_ICONQUESTION, MB_OK, MB_OKCANCEL,
    MESSAGEBOX_RESULT, MESSAGEBOX_STYLE,
};

use crate::application::interaction::{Confirmation, UserPrompt};

/// Shows modal message boxes without an owner window.
#[derive(Debug, Default, Clone, Copy)]
pub struct MessageBoxPrompt;

impl MessageBoxPrompt {
    pub fn new() -> Self {
        Self
    }

    fn show(&self, title: &str, message: &str, style: MESSAGEBOX_STYLE) -> MESSAGEBOX_RESULT {
        let text = HSTRING::from(message);
        let caption = HSTRING::from(title);
        // SAFETY: both HSTRINGs are NUL-terminated and outlive the call.
        // A null owner window is allowed; the box is then application modal.
        unsafe {
            MessageBoxW(
                HWND::default(),
                PCWSTR(text.as_ptr()),
                PCWSTR(caption.as_ptr()),
                style,
            )
        }
    }
}

impl UserPrompt for MessageBoxPrompt {
    fn notify(&self, title: &str, message: &str) {
        self.show(title, message, MB_OK | MB_ICONINFORMATION);
    }

    fn confirm(&self, title: &str, message: &str) -> Confirmation {
        match self.show(title, message, MB_OKCANCEL | MB_ICONQUESTION) {
            IDCANCEL => Confirmation::Cancel,
            _ => Confirmation::Accept,
        }
    }
}
