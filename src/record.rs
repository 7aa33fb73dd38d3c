use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub category: String,
    pub image_url: String,
    pub description: String,
}

/// A gallery image. `id` is positional: inserting a row above shifts every id
/// below it, so use [`SignaturePiece::stable_id`] when identity must survive edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignaturePiece {
    pub image_url: String,
    pub id: usize,
}

impl SignaturePiece {
    /// FNV-1a over the image URL.
    pub fn stable_id(&self) -> u64 {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0100_0000_01b3;

        self.image_url
            .bytes()
            .fold(OFFSET, |hash, b| (hash ^ u64::from(b)).wrapping_mul(PRIME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(url: &str, id: usize) -> SignaturePiece {
        SignaturePiece { image_url: url.to_string(), id }
    }

    #[test]
    fn stable_id_ignores_position() {
        assert_eq!(piece("http://x/a.jpg", 1).stable_id(), piece("http://x/a.jpg", 7).stable_id());
    }

    #[test]
    fn stable_id_differs_per_url() {
        assert_ne!(piece("http://x/a.jpg", 1).stable_id(), piece("http://x/b.jpg", 1).stable_id());
    }

    #[test]
    fn stable_id_of_empty_url_is_offset_basis() {
        assert_eq!(piece("", 1).stable_id(), 0xcbf2_9ce4_8422_2325);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_string(&piece("u", 3)).unwrap();
        assert_eq!(json, r#"{"imageUrl":"u","id":3}"#);
    }
}
