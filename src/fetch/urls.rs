// src/fetch/urls.rs

/// NYC Open Data motor vehicle collisions, served as CSV.
pub static BASE_URL: &str = "https://data.cityofnewyork.us/resource/h9gi-nx95.csv";

/// Server-side row cap embedded in `RAW_QUERY`.
pub const ROW_LIMIT: usize = 5000;

/// Collisions with at least one cyclist injured or killed.
pub static RAW_QUERY: &str =
    "?$where=number_of_cyclist_injured > 0 OR number_of_cyclist_killed > 0&$limit=5000";

/// Characters that carry query structure and must survive encoding.
const STRUCTURAL: &[char] = &['?', '&', '$', '='];

/// Percent-encode `raw`, leaving the structural characters in place.
///
/// Everything between structural characters goes through `urlencoding::encode`,
/// so only ASCII alphanumerics and `-_.~` stay literal there.
pub fn encode_query(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() * 3 / 2);
    let mut last = 0;
    for (idx, sep) in raw.match_indices(STRUCTURAL) {
        out.push_str(&urlencoding::encode(&raw[last..idx]));
        out.push_str(sep);
        last = idx + sep.len();
    }
    out.push_str(&urlencoding::encode(&raw[last..]));
    out
}

/// Append the encoded `raw` query to `base`.
pub fn build_query_url(base: &str, raw: &str) -> String {
    format!("{}{}", base, encode_query(raw))
}

/// The URL the default run fetches.
pub fn default_query_url() -> String {
    build_query_url(BASE_URL, RAW_QUERY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn spaces_and_comparisons_are_escaped() {
        let encoded = encode_query(RAW_QUERY);
        assert_eq!(
            encoded,
            "?$where=number_of_cyclist_injured%20%3E%200%20OR%20number_of_cyclist_killed%20%3E%200&$limit=5000"
        );
        assert!(!encoded.contains(' '));
    }

    #[test]
    fn raw_query_limit_matches_row_limit() {
        assert!(RAW_QUERY.ends_with(&format!("&$limit={ROW_LIMIT}")));
    }

    #[test]
    fn decoding_restores_raw_query() {
        let encoded = encode_query(RAW_QUERY);
        let decoded = urlencoding::decode(&encoded).expect("valid utf-8");
        assert_eq!(decoded, RAW_QUERY);

        let odd = "?$where=name = 'O''Brien / 5%'&$order=crash_date DESC";
        assert_eq!(urlencoding::decode(&encode_query(odd)).unwrap(), odd);
    }

    #[test]
    fn default_url_parses_into_where_and_limit() {
        let url = Url::parse(&default_query_url()).expect("default URL should parse");
        assert_eq!(url.host_str(), Some("data.cityofnewyork.us"));
        assert_eq!(url.path(), "/resource/h9gi-nx95.csv");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (
                    "$where".to_string(),
                    "number_of_cyclist_injured > 0 OR number_of_cyclist_killed > 0".to_string()
                ),
                ("$limit".to_string(), ROW_LIMIT.to_string()),
            ]
        );
    }
}
