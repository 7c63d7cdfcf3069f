use std::sync::{Arc, Mutex};

use anyhow::Context;
use jmd_core_page_contracts::PageFeatureService;
use jmd_host_contracts::{
    navigator::{NavigatorService, OpenOutcome},
    page::{HeaderView, ThemeView},
};
use jmd_models::page::{HeaderScrollState, HeaderVisibility, Theme, ThemeState};
use jmd_utils::MutexExt;
use url::Url;

#[derive(Debug, Clone)]
pub struct PageFeatureServiceImpl<ThemeV, Header, Navigator> {
    theme_view: ThemeV,
    header: Header,
    navigator: Navigator,
    config: PageFeatureConfig,
    state: Arc<Mutex<PageState>>,
}

#[derive(Debug, Clone)]
pub struct PageFeatureConfig {
    pub header_hide_threshold: f64,
    pub maps_url: Arc<Url>,
}

#[derive(Debug)]
struct PageState {
    theme: ThemeState,
    scroll: HeaderScrollState,
}

impl<ThemeV, Header, Navigator> PageFeatureServiceImpl<ThemeV, Header, Navigator> {
    pub fn new(
        theme_view: ThemeV,
        header: Header,
        navigator: Navigator,
        config: PageFeatureConfig,
    ) -> Self {
        Self {
            theme_view,
            header,
            navigator,
            config,
            state: Arc::new(Mutex::new(PageState {
                theme: ThemeState::new(Theme::Light),
                scroll: HeaderScrollState::default(),
            })),
        }
    }
}

impl<ThemeV, Header, Navigator> PageFeatureService
    for PageFeatureServiceImpl<ThemeV, Header, Navigator>
where
    ThemeV: ThemeView,
    Header: HeaderView,
    Navigator: NavigatorService,
{
    fn init_theme(&self) -> Theme {
        let theme = Theme::from_preference(self.theme_view.prefers_dark());
        self.state.lock_unpoisoned().theme = ThemeState::new(theme);
        self.theme_view.apply(theme);
        theme
    }

    fn theme(&self) -> Theme {
        self.state.lock_unpoisoned().theme.current()
    }

    fn toggle_theme(&self) -> Theme {
        let theme = self.state.lock_unpoisoned().theme.toggle();
        tracing::debug!(theme = theme.as_str(), "toggled theme");
        self.theme_view.apply(theme);
        theme
    }

    fn on_scroll(&self, offset: f64) -> HeaderVisibility {
        let visibility = self
            .state
            .lock_unpoisoned()
            .scroll
            .update(offset, self.config.header_hide_threshold);
        self.header.set_visibility(visibility);
        visibility
    }

    fn open_map(&self) -> anyhow::Result<()> {
        let url = &*self.config.maps_url;
        match self.navigator.open(url) {
            Ok(OpenOutcome::Opened) => return Ok(()),
            Ok(OpenOutcome::Blocked) => tracing::info!("opening the map was blocked"),
            Err(err) => tracing::warn!("failed to open the map: {err:#}"),
        }

        self.navigator
            .navigate(url)
            .context("Failed to navigate to the map")
    }
}
