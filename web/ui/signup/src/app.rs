use std::sync::Arc;

use dominator::{html, Dom};

use crate::config::SignupConfig;
use crate::error::{Error, Result};
use crate::notify::WindowAlert;
use crate::pages::signup::SignupPage;
use crate::state::SignupState;

#[derive(Clone)]
pub struct App {
    pub signup: Arc<SignupState>,
}

impl App {
    pub fn new(config: SignupConfig) -> Arc<Self> {
        log::debug!("Creating signup app with min password length {}", config.min_password_length);
        Arc::new(Self {
            signup: SignupState::new(Arc::new(config), WindowAlert),
        })
    }

    pub fn render(app: Arc<Self>) -> Dom {
        html!("div", {
            .class(["global"])
            .children(&mut [
                SignupPage::new(app.signup.clone()).render(),
            ])
        })
    }

    pub fn mount(app: Arc<Self>) -> Result<()> {
        let body = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
            .ok_or_else(|| Error::Dom("document has no body".to_string()))?;
        dominator::append_dom(&body, Self::render(app));
        Ok(())
    }
}
