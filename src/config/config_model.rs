use url::Url;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub api: Api,
}

#[derive(Debug, Clone)]
pub struct Api {
    pub base_url: Url,
}
