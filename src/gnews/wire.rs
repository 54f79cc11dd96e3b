use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct Envelope {
    pub(crate) articles: Vec<RawArticle>,
}

#[derive(Deserialize)]
pub(crate) struct RawArticle {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub(crate) published_at: Option<String>,
    pub(crate) source: Option<RawSource>,
}

#[derive(Deserialize)]
pub(crate) struct RawSource {
    pub(crate) name: Option<String>,
}
