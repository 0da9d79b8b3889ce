use thiserror::Error;
use url::Url;

/// Endpoint used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://api.kcisa.kr/API_CIA_077/request";

/// Public key shipped with the tool for the default endpoint.
pub const DEFAULT_SERVICE_KEY: &str = "aa979dec-76e3-4d9e-86a1-6652b1470a5e";

pub const DEFAULT_ROWS: u32 = 10;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("요청 URL을 입력해 주세요.")]
    EmptyUrl,
    #[error("invalid request URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// User supplied search parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub api_url: String,
    pub service_key: String,
    pub rows: u32,
    pub keyword: String,
    /// Extra query parameters as `key=value&key=value`.
    pub extra_params: String,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            service_key: DEFAULT_SERVICE_KEY.to_string(),
            rows: DEFAULT_ROWS,
            keyword: String::new(),
            extra_params: String::new(),
        }
    }
}

impl SearchForm {
    /// Build the request URL for `page`.
    ///
    /// Defaults are only added for parameters the configured URL does not
    /// already carry, so a caller can pin any of them in the base URL.
    pub fn build_url(&self, page: u32) -> Result<Url, RequestError> {
        let base = self.api_url.trim();
        if base.is_empty() {
            return Err(RequestError::EmptyUrl);
        }
        let mut url = Url::parse(base).map_err(|source| RequestError::InvalidUrl {
            url: base.to_string(),
            source,
        })?;

        let mut params: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        let mut set_default = |key: &str, value: &str| {
            if !params.iter().any(|(k, _)| k == key) {
                params.push((key.to_string(), value.to_string()));
            }
        };

        set_default("serviceKey", &self.service_key);
        set_default("_type", "json");
        set_default("pageNo", &page.to_string());
        set_default("numOfRows", &self.rows.to_string());

        let keyword = self.keyword.trim();
        if !keyword.is_empty() {
            set_default("keyword", keyword);
        }

        for pair in self.extra_params.trim().split('&') {
            let mut parts = pair.split('=');
            if let (Some(key), Some(value)) = (parts.next(), parts.next())
                && !key.is_empty()
                && !value.is_empty()
            {
                set_default(key, value);
            }
        }

        url.query_pairs_mut().clear().extend_pairs(&params);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(api_url: &str) -> SearchForm {
        SearchForm {
            api_url: api_url.to_string(),
            service_key: "KEY".to_string(),
            ..SearchForm::default()
        }
    }

    fn pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs().into_owned().collect()
    }

    fn get(url: &Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn test_build_url_adds_defaults() {
        let url = form("https://api.example.org/jobs").build_url(3).unwrap();
        assert_eq!(
            pairs(&url),
            vec![
                ("serviceKey".into(), "KEY".into()),
                ("_type".into(), "json".into()),
                ("pageNo".into(), "3".into()),
                ("numOfRows".into(), "10".into()),
            ]
        );
    }

    #[test]
    fn test_build_url_keeps_caller_params() {
        let url = form("https://api.example.org/jobs?pageNo=7&_type=xml&serviceKey=MINE")
            .build_url(1)
            .unwrap();
        assert_eq!(get(&url, "pageNo").as_deref(), Some("7"));
        assert_eq!(get(&url, "_type").as_deref(), Some("xml"));
        assert_eq!(get(&url, "serviceKey").as_deref(), Some("MINE"));
        assert_eq!(get(&url, "numOfRows").as_deref(), Some("10"));
    }

    #[test]
    fn test_build_url_keyword_and_extra_params() {
        let mut search = form("https://api.example.org/jobs?keyword=fixed");
        search.keyword = "  curator ".to_string();
        search.extra_params = "area=seoul&=x&empty=&keyword=other&numOfRows=50".to_string();
        let url = search.build_url(1).unwrap();
        assert_eq!(get(&url, "keyword").as_deref(), Some("fixed"));
        assert_eq!(get(&url, "area").as_deref(), Some("seoul"));
        assert_eq!(get(&url, "empty"), None);
        assert_eq!(get(&url, "numOfRows").as_deref(), Some("10"));
    }

    #[test]
    fn test_build_url_trims_keyword() {
        let mut search = form("https://api.example.org/jobs");
        search.keyword = "  curator ".to_string();
        let url = search.build_url(1).unwrap();
        assert_eq!(get(&url, "keyword").as_deref(), Some("curator"));

        search.keyword = "   ".to_string();
        let url = search.build_url(1).unwrap();
        assert_eq!(get(&url, "keyword"), None);
    }

    #[test]
    fn test_build_url_empty_and_invalid() {
        assert!(matches!(
            form("   ").build_url(1),
            Err(RequestError::EmptyUrl)
        ));
        let err = form("not a url").build_url(1).unwrap_err();
        assert!(err.to_string().contains("invalid request URL"));
    }
}
