//! Ambient client signals used when nothing is persisted yet.

/// System dark-mode preference and client locale.
pub trait EnvironmentSignals: Send + Sync {
    /// `prefers-color-scheme: dark`, or `None` when the signal is unavailable.
    fn prefers_dark(&self) -> Option<bool>;

    /// Client locale tag such as `th-TH` or `en-US`.
    fn locale(&self) -> Option<String>;
}

/// Reads `matchMedia` and `navigator.language` from the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSignals;

impl EnvironmentSignals for BrowserSignals {
    fn prefers_dark(&self) -> Option<bool> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()?
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
                .map(|mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn locale(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()?.navigator().language()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

/// Fixed signals for off-browser rendering and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedSignals {
    pub prefers_dark: Option<bool>,
    pub locale: Option<String>,
}

impl EnvironmentSignals for FixedSignals {
    fn prefers_dark(&self) -> Option<bool> {
        self.prefers_dark
    }

    fn locale(&self) -> Option<String> {
        self.locale.clone()
    }
}
