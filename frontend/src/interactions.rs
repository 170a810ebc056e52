use log::info;
use stylist::GlobalStyle;

use crate::config::PageConfig;
use crate::demo::runners::{self, DemoPanel};
use crate::effects::{navbar, reveal::RevealAnimator, styles};
use crate::error::BindError;
use crate::listener::Listener;
use crate::view::PageView;
use crate::{nav, scroll};

/// Everything installed on the page. Dropping it detaches the handlers.
pub struct Interactions {
    _styles: GlobalStyle,
    _listeners: Vec<Listener>,
    _reveal: RevealAnimator,
}

impl Interactions {
    pub fn install(view: &PageView, config: &PageConfig) -> Result<Self, BindError> {
        let styles = styles::inject()?;

        let mut listeners = nav::install(view, config.menu_open_class)?;
        listeners.extend(scroll::install(view)?);
        listeners.push(navbar::install(view, config.navbar_scroll_threshold)?);

        let reveal = RevealAnimator::install(&view.cards, &config.reveal)?;

        runners::install_globals(
            &view.window,
            DemoPanel::new(view.results.clone(), config.demo.clone()),
        )?;

        info!(
            "Installed {} listeners, observing {} cards",
            listeners.len(),
            view.cards.len()
        );

        Ok(Self {
            _styles: styles,
            _listeners: listeners,
            _reveal: reveal,
        })
    }

    /// The page never tears its handlers down.
    pub fn keep_alive(self) {
        std::mem::forget(self);
    }
}
