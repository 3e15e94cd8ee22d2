//! `/admin/help` endpoint.

use crate::error::Result;
use crate::types::{HelpText, HelpTopic};

use super::HttpGateway;

impl HttpGateway {
    pub(crate) async fn fetch_help(&self, locale: &str, topic: HelpTopic) -> Result<HelpText> {
        let path = format!(
            "/admin/help/{}/{}",
            urlencoding::encode(locale),
            topic.as_str()
        );
        self.get_json(&path, "getHelp").await
    }
}
