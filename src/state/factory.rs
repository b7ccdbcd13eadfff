//! Post construction from type tags.
//!
//! The factory dispatches on a closed tag set. An unrecognized tag is a
//! hard [`NetworkError::UnknownPostType`] rather than a silent nothing.

use crate::error::NetworkError;
use crate::state::post::{Post, PostKind};
use std::str::FromStr;

/// Closed set of post type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostType {
    Text,
    Image,
    Sale,
}

impl FromStr for PostType {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Text" => Ok(Self::Text),
            "Image" => Ok(Self::Image),
            "Sale" => Ok(Self::Sale),
            other => Err(NetworkError::UnknownPostType(other.to_string())),
        }
    }
}

/// Build a post for `author` from a parsed tag and payload.
///
/// `Sale` requires both `price` and `location`; the other variants ignore
/// them.
pub(crate) fn build(
    author: &str,
    post_type: PostType,
    content: &str,
    price: Option<f64>,
    location: Option<&str>,
) -> Result<Post, NetworkError> {
    let kind = match post_type {
        PostType::Text => PostKind::Text,
        PostType::Image => PostKind::Image,
        PostType::Sale => {
            let (Some(price), Some(location)) = (price, location) else {
                return Err(NetworkError::IncompleteSaleListing);
            };
            PostKind::Sale {
                price,
                location: location.to_string(),
                available: true,
            }
        }
    };
    Ok(Post::new(author, content, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_parse() {
        assert_eq!("Text".parse::<PostType>().unwrap(), PostType::Text);
        assert_eq!("Image".parse::<PostType>().unwrap(), PostType::Image);
        assert_eq!("Sale".parse::<PostType>().unwrap(), PostType::Sale);
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let err = "Video".parse::<PostType>().unwrap_err();
        assert_eq!(err, NetworkError::UnknownPostType("Video".to_string()));
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert!("text".parse::<PostType>().is_err());
        assert!("SALE".parse::<PostType>().is_err());
    }

    #[test]
    fn sale_requires_price_and_location() {
        let err = build("alice", PostType::Sale, "synth", Some(100.0), None).unwrap_err();
        assert_eq!(err, NetworkError::IncompleteSaleListing);
        let err = build("alice", PostType::Sale, "synth", None, Some("Berlin")).unwrap_err();
        assert_eq!(err, NetworkError::IncompleteSaleListing);
        let post = build("alice", PostType::Sale, "synth", Some(100.0), Some("Berlin")).unwrap();
        assert_eq!(post.price(), Some(100.0));
        assert_eq!(post.is_available(), Some(true));
    }

    #[test]
    fn text_and_image_ignore_sale_fields() {
        let post = build("alice", PostType::Text, "hi", Some(5.0), Some("x")).unwrap();
        assert_eq!(post.kind, PostKind::Text);
        let post = build("alice", PostType::Image, "a.png", Some(5.0), None).unwrap();
        assert_eq!(post.kind, PostKind::Image);
    }
}
