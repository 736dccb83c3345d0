use anyhow::Result;
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::Duration;

/// How long to wait for the wasm bundle to hydrate and re-render.
const RENDER_TIMEOUT: Duration = Duration::from_secs(20);

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            // Wide enough for the desktop navbar.
            .window_size(Some((1280, 900)))
            .build()
            .map_err(|e| anyhow::anyhow!("invalid launch options: {e}"))?;

        Ok(Self {
            browser: ChromeBrowser::new(options)?,
        })
    }

    pub fn open(&self, url: &str) -> Result<SitePage> {
        let tab = self.browser.new_tab()?;
        tab.set_default_timeout(RENDER_TIMEOUT);
        tab.navigate_to(url)?;
        tab.wait_until_navigated()?;
        Ok(SitePage { tab })
    }
}

/// A tab showing the site.
pub struct SitePage {
    tab: Arc<Tab>,
}

impl SitePage {
    pub fn text_of(&self, selector: &str) -> Result<String> {
        Ok(self.tab.wait_for_element(selector)?.get_inner_text()?)
    }

    /// Wait until `selector` shows exactly `expected`, since pages re-render
    /// after a click rather than navigating.
    pub fn wait_for_text(&self, selector: &str, expected: &str) -> Result<()> {
        let deadline = std::time::Instant::now() + RENDER_TIMEOUT;
        loop {
            let current = self.text_of(selector)?;
            if current.trim() == expected {
                return Ok(());
            }
            if std::time::Instant::now() >= deadline {
                anyhow::bail!("{selector} shows {current:?}, expected {expected:?}");
            }
            std::thread::sleep(Duration::from_millis(100));
        }
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        self.tab.wait_for_element(selector)?.click()?;
        Ok(())
    }

    /// Click the first button whose visible text is exactly `label`.
    pub fn click_button(&self, label: &str) -> Result<()> {
        let xpath = format!("//button[normalize-space()='{label}']");
        self.tab.wait_for_xpath(&xpath)?.click()?;
        Ok(())
    }

    pub fn fill(&self, selector: &str, text: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        element.type_into(text)?;
        Ok(())
    }
}
