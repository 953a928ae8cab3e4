use gloo::timers::callback::Timeout;

pub(crate) const NOTICE_TIMEOUT_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NoticeKind {
    Success,
    Danger,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "alert alert-success position-fixed notice-toast",
            NoticeKind::Danger => "alert alert-danger position-fixed notice-toast",
        }
    }
}

/// Appends a transient alert to the page body and removes it after
/// `NOTICE_TIMEOUT_MS`.
pub(crate) fn show(message: &str, kind: NoticeKind) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(notice) = document.create_element("div") else {
        gloo::console::warn!("notice: create element failed");
        return;
    };
    notice.set_class_name(kind.class());
    for (name, value) in [("role", "alert"), ("aria-live", "polite")] {
        if let Err(err) = notice.set_attribute(name, value) {
            gloo::console::warn!("notice: set attribute failed", name, err);
        }
    }
    notice.set_text_content(Some(message));
    if body.append_child(&notice).is_err() {
        gloo::console::warn!("notice: append failed");
        return;
    }
    Timeout::new(NOTICE_TIMEOUT_MS, move || {
        notice.remove();
    })
    .forget();
}
