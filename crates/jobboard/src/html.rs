use html_escape::{encode_quoted_attribute, encode_safe};
use jobboard_core::DetailView;

use crate::render::{LINK_LABEL, placeholder};

/// Render the detail view as an HTML fragment.
pub fn detail_to_html(detail: &DetailView) -> String {
    if let Some((title, message)) = placeholder(detail) {
        return format!("<h3>{}</h3>\n<p>{}</p>\n", title, message);
    }
    let DetailView::Item(page) = detail else {
        return String::new();
    };

    let mut html = String::new();
    html.push_str(&format!("<h3>{}</h3>\n", encode_safe(&page.title)));
    html.push_str(&format!("<p>{}</p>\n", encode_safe(&page.summary)));
    html.push_str("<div class=\"detail-list\">\n");
    for entry in &page.entries {
        html.push_str(&format!(
            "  <div class=\"detail-item\"><span>{}</span><strong>{}</strong></div>\n",
            encode_safe(&entry.label),
            encode_safe(&entry.value)
        ));
    }
    html.push_str("</div>\n");
    if !page.link.is_empty() {
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>\n",
            encode_quoted_attribute(&page.link),
            LINK_LABEL
        ));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::{DetailEntry, DetailPage};

    #[test]
    fn test_detail_to_html_escapes_content() {
        let page = DetailPage {
            title: "<b>Curator</b>".to_string(),
            summary: "Tom & 'Jerry'".to_string(),
            link: "https://example.org/?a=1&b=2".to_string(),
            entries: vec![DetailEntry::new("기관", "\"Museum\"")],
        };
        let html = detail_to_html(&DetailView::Item(page));
        assert!(html.starts_with(
            "<h3>&lt;b&gt;Curator&lt;&#x2F;b&gt;</h3>\n<p>Tom &amp; &#x27;Jerry&#x27;</p>\n"
        ));
        assert!(html.contains("<span>기관</span><strong>&quot;Museum&quot;</strong>"));
        assert!(html.contains("href=\"https://example.org/?a=1&amp;b=2\""));
    }

    #[test]
    fn test_detail_to_html_omits_missing_link() {
        let page = DetailPage {
            title: "T".to_string(),
            summary: "S".to_string(),
            link: String::new(),
            entries: Vec::new(),
        };
        let html = detail_to_html(&DetailView::Item(page));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_detail_to_html_placeholders() {
        assert!(detail_to_html(&DetailView::Corrupt).contains("상세 정보 오류"));
        assert!(detail_to_html(&DetailView::Missing).contains("상세 정보 없음"));
    }
}
