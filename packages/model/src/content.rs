//! Typed content records, one per section type.
//!
//! Every field is optional on the wire and defaults when absent. Keys a
//! record does not know are kept in its `extra` map so a hand-edited or
//! newer document survives an import/export cycle unchanged. List items
//! and blocks carry their own `extra` map for the same reason.

use crate::icons::{AboutIcon, ContactIcon, FeatureIcon, SocialIcon, SocialPlatform};
use crate::section::SectionType;
use crate::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Unrecognised content keys, preserved verbatim.
pub type Extra = Map<String, Value>;

/// Content of a section, keyed by its type.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Header(HeaderContent),
    Hero(HeroContent),
    Features(FeaturesContent),
    About(AboutContent),
    Contact(ContactContent),
    Footer(FooterContent),
}

impl SectionContent {
    /// Empty record for a type (every field absent).
    pub fn empty(section_type: SectionType) -> Self {
        match section_type {
            SectionType::Header => SectionContent::Header(HeaderContent::default()),
            SectionType::Hero => SectionContent::Hero(HeroContent::default()),
            SectionType::Features => SectionContent::Features(FeaturesContent::default()),
            SectionType::About => SectionContent::About(AboutContent::default()),
            SectionType::Contact => SectionContent::Contact(ContactContent::default()),
            SectionType::Footer => SectionContent::Footer(FooterContent::default()),
        }
    }

    pub fn section_type(&self) -> SectionType {
        match self {
            SectionContent::Header(_) => SectionType::Header,
            SectionContent::Hero(_) => SectionType::Hero,
            SectionContent::Features(_) => SectionType::Features,
            SectionContent::About(_) => SectionType::About,
            SectionContent::Contact(_) => SectionType::Contact,
            SectionContent::Footer(_) => SectionType::Footer,
        }
    }

    /// Read a content map as the record for `section_type`.
    pub fn from_map(section_type: SectionType, map: Map<String, Value>) -> ModelResult<Self> {
        let value = Value::Object(map);
        let invalid = |e: serde_json::Error| ModelError::invalid_content(section_type.as_str(), e.to_string());

        Ok(match section_type {
            SectionType::Header => SectionContent::Header(serde_json::from_value(value).map_err(invalid)?),
            SectionType::Hero => SectionContent::Hero(serde_json::from_value(value).map_err(invalid)?),
            SectionType::Features => SectionContent::Features(serde_json::from_value(value).map_err(invalid)?),
            SectionType::About => SectionContent::About(serde_json::from_value(value).map_err(invalid)?),
            SectionType::Contact => SectionContent::Contact(serde_json::from_value(value).map_err(invalid)?),
            SectionType::Footer => SectionContent::Footer(serde_json::from_value(value).map_err(invalid)?),
        })
    }

    /// Content as a plain JSON map (the wire form of `content`).
    pub fn to_map(&self) -> ModelResult<Map<String, Value>> {
        let value = match self {
            SectionContent::Header(c) => serde_json::to_value(c)?,
            SectionContent::Hero(c) => serde_json::to_value(c)?,
            SectionContent::Features(c) => serde_json::to_value(c)?,
            SectionContent::About(c) => serde_json::to_value(c)?,
            SectionContent::Contact(c) => serde_json::to_value(c)?,
            SectionContent::Footer(c) => serde_json::to_value(c)?,
        };

        match value {
            Value::Object(map) => Ok(map),
            _ => Err(ModelError::invalid_content(
                self.section_type().as_str(),
                "content did not serialize to an object",
            )),
        }
    }

    /// Look up a string-valued content key by its wire name.
    pub fn text(&self, key: &str) -> Option<&str> {
        let (known, extra) = match self {
            SectionContent::Header(c) => (c.text(key), &c.extra),
            SectionContent::Hero(c) => (c.text(key), &c.extra),
            SectionContent::Features(c) => (c.text(key), &c.extra),
            SectionContent::About(c) => (c.text(key), &c.extra),
            SectionContent::Contact(c) => (c.text(key), &c.extra),
            SectionContent::Footer(c) => (c.text(key), &c.extra),
        };
        known.or_else(|| extra.get(key).and_then(Value::as_str))
    }
}

// Maps wire key names to the record's optional string fields.
macro_rules! text_fields {
    ($ty:ty { $($key:literal => $field:ident),* $(,)? }) => {
        impl $ty {
            fn text(&self, key: &str) -> Option<&str> {
                match key {
                    $($key => self.$field.as_deref(),)*
                    _ => None,
                }
            }
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_image: Option<String>,
    pub menu_items: Vec<MenuItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Logo image corner rounding, percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounded_image: Option<u8>,
    #[serde(flatten)]
    pub extra: Extra,
}

text_fields!(HeaderContent {
    "logo" => logo,
    "logoImage" => logo_image,
    "logoTextColor" => logo_text_color,
    "menuColor" => menu_color,
    "backgroundColor" => background_color,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub url: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl MenuItem {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
            extra: Extra::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_color: Option<String>,
    /// Overlay opacity, percent (0-100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_opacity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_background_color: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

text_fields!(HeroContent {
    "title" => title,
    "description" => description,
    "imageUrl" => image_url,
    "ctaText" => cta_text,
    "ctaLink" => cta_link,
    "overlayColor" => overlay_color,
    "titleColor" => title_color,
    "descriptionColor" => description_color,
    "buttonTextColor" => button_text_color,
    "buttonBackgroundColor" => button_background_color,
});

pub const DEFAULT_OVERLAY_OPACITY: u8 = 40;

impl HeroContent {
    /// Overlay alpha in `0.0..=1.0`.
    pub fn overlay_alpha(&self) -> f32 {
        f32::from(self.overlay_opacity.unwrap_or(DEFAULT_OVERLAY_OPACITY).min(100)) / 100.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturesContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub features: Vec<Feature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_title_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_description_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_icon_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_icon_background_color: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

text_fields!(FeaturesContent {
    "title" => title,
    "description" => description,
    "titleColor" => title_color,
    "descriptionColor" => description_color,
    "cardColor" => card_color,
    "cardTitleColor" => card_title_color,
    "cardDescriptionColor" => card_description_color,
    "cardIconColor" => card_icon_color,
    "cardIconBackgroundColor" => card_icon_background_color,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: FeatureIcon,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Feature {
    pub fn new(title: impl Into<String>, description: impl Into<String>, icon: FeatureIcon) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon,
            extra: Extra::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_color: Option<String>,
    pub sections: Vec<AboutBlock>,
    #[serde(flatten)]
    pub extra: Extra,
}

text_fields!(AboutContent {
    "title" => title,
    "description" => description,
    "imageUrl" => image_url,
    "titleColor" => title_color,
    "descriptionColor" => description_color,
});

/// Colors shared by every about block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AboutBlock {
    #[serde(rename_all = "camelCase")]
    Mission {
        #[serde(default)]
        title: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        icon: AboutIcon,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description_color: Option<String>,
        #[serde(flatten)]
        colors: BlockColors,
        #[serde(flatten)]
        extra: Extra,
    },
    #[serde(rename_all = "camelCase")]
    Values {
        #[serde(default)]
        title: String,
        #[serde(default)]
        values: Vec<String>,
        #[serde(default)]
        icon: AboutIcon,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        values_color: Option<String>,
        #[serde(flatten)]
        colors: BlockColors,
        #[serde(flatten)]
        extra: Extra,
    },
}

impl AboutBlock {
    pub fn title(&self) -> &str {
        match self {
            AboutBlock::Mission { title, .. } | AboutBlock::Values { title, .. } => title,
        }
    }

    pub fn icon(&self) -> AboutIcon {
        match self {
            AboutBlock::Mission { icon, .. } | AboutBlock::Values { icon, .. } => *icon,
        }
    }

    pub fn colors(&self) -> &BlockColors {
        match self {
            AboutBlock::Mission { colors, .. } | AboutBlock::Values { colors, .. } => colors,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_background_color: Option<String>,
    pub contact_items: Vec<ContactItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

text_fields!(ContactContent {
    "title" => title,
    "description" => description,
    "titleColor" => title_color,
    "descriptionColor" => description_color,
    "buttonTextColor" => button_text_color,
    "buttonBackgroundColor" => button_background_color,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactItem {
    pub title: String,
    pub subtitle: String,
    pub icon: ContactIcon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle_color: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    pub sections: Vec<FooterBlock>,
    #[serde(flatten)]
    pub extra: Extra,
}

text_fields!(FooterContent {
    "copyright" => copyright,
    "backgroundColor" => background_color,
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FooterBlock {
    #[serde(rename_all = "camelCase")]
    Description {
        #[serde(default)]
        title: String,
        #[serde(default)]
        subtitle: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title_color: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subtitle_color: Option<String>,
        #[serde(flatten)]
        extra: Extra,
    },
    #[serde(rename_all = "camelCase")]
    Links {
        #[serde(default)]
        title: String,
        #[serde(default)]
        values: Vec<FooterEntry>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title_color: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        values_color: Option<String>,
        #[serde(flatten)]
        extra: Extra,
    },
    #[serde(rename_all = "camelCase")]
    Contact {
        #[serde(default)]
        title: String,
        #[serde(default)]
        values: Vec<FooterEntry>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title_color: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        values_color: Option<String>,
        #[serde(flatten)]
        extra: Extra,
    },
    #[serde(rename_all = "camelCase")]
    Social {
        #[serde(default)]
        title: String,
        #[serde(default)]
        social_links: Vec<SocialLink>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title_color: Option<String>,
        #[serde(flatten)]
        extra: Extra,
    },
}

impl FooterBlock {
    pub fn title(&self) -> &str {
        match self {
            FooterBlock::Description { title, .. }
            | FooterBlock::Links { title, .. }
            | FooterBlock::Contact { title, .. }
            | FooterBlock::Social { title, .. } => title,
        }
    }

    pub fn title_color(&self) -> Option<&str> {
        match self {
            FooterBlock::Description { title_color, .. }
            | FooterBlock::Links { title_color, .. }
            | FooterBlock::Contact { title_color, .. }
            | FooterBlock::Social { title_color, .. } => title_color.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterEntry {
    pub text: String,
    pub url: String,
    pub is_link: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

impl FooterEntry {
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
            is_link: true,
            extra: Extra::new(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: String::new(),
            is_link: false,
            extra: Extra::new(),
        }
    }
}

/// A footer social link. The icon always matches the platform: it is
/// filled in when absent on read and a mismatched pair is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WireSocialLink")]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
    pub icon: SocialIcon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_background_color: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSocialLink {
    platform: SocialPlatform,
    #[serde(default)]
    url: String,
    #[serde(default)]
    icon: Option<SocialIcon>,
    #[serde(default)]
    icon_color: Option<String>,
    #[serde(default)]
    icon_background_color: Option<String>,
    #[serde(flatten)]
    extra: Extra,
}

impl TryFrom<WireSocialLink> for SocialLink {
    type Error = ModelError;

    fn try_from(wire: WireSocialLink) -> Result<Self, Self::Error> {
        let expected = wire.platform.icon();
        let icon = wire.icon.unwrap_or(expected);
        if icon != expected {
            return Err(ModelError::invalid_content(
                SectionType::Footer.as_str(),
                format!("{} link cannot use the {} icon", wire.platform.as_str(), icon.as_str()),
            ));
        }

        Ok(SocialLink {
            platform: wire.platform,
            url: wire.url,
            icon,
            icon_color: wire.icon_color,
            icon_background_color: wire.icon_background_color,
            extra: wire.extra,
        })
    }
}

impl SocialLink {
    /// New link with the platform's home URL and brand colors.
    pub fn for_platform(platform: SocialPlatform) -> Self {
        Self {
            platform,
            url: platform.home_url().to_string(),
            icon: platform.icon(),
            icon_color: Some("#ffffff".to_string()),
            icon_background_color: Some(platform.brand_color().to_string()),
            extra: Extra::new(),
        }
    }

    /// Switch platform; the icon follows.
    pub fn set_platform(&mut self, platform: SocialPlatform) {
        self.platform = platform;
        self.icon = platform.icon();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_keys_default() {
        let content = SectionContent::from_map(SectionType::Hero, Map::new()).unwrap();
        match content {
            SectionContent::Hero(hero) => {
                assert!(hero.cta_text.is_none());
                assert_eq!(hero.overlay_alpha(), 0.4);
            }
            other => panic!("expected hero content, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_keys_survive() {
        let map = json!({ "logo": "Acme", "tagline": "We build" });
        let content = SectionContent::from_map(SectionType::Header, map.as_object().unwrap().clone()).unwrap();

        assert_eq!(content.text("logo"), Some("Acme"));
        assert_eq!(content.text("tagline"), Some("We build"));

        let back = content.to_map().unwrap();
        assert_eq!(back.get("tagline"), Some(&json!("We build")));
    }

    #[test]
    fn test_bad_icon_is_invalid_content() {
        let map = json!({ "features": [{ "title": "A", "icon": "Rocket" }] });
        let err = SectionContent::from_map(SectionType::Features, map.as_object().unwrap().clone());
        assert!(matches!(err, Err(ModelError::InvalidContent { .. })));
    }

    #[test]
    fn test_tagged_blocks() {
        let map = json!({
            "sections": [
                { "type": "mission", "title": "Our Mission", "description": "Help", "icon": "Target", "iconColor": "#3b82f6" },
                { "type": "values", "title": "Our Values", "values": ["Quality"], "icon": "Users" }
            ]
        });
        let content = SectionContent::from_map(SectionType::About, map.as_object().unwrap().clone()).unwrap();
        let SectionContent::About(about) = content else {
            panic!("expected about content");
        };

        assert_eq!(about.sections.len(), 2);
        assert_eq!(about.sections[0].colors().icon_color.as_deref(), Some("#3b82f6"));
        assert!(matches!(&about.sections[1], AboutBlock::Values { values, .. } if values == &vec!["Quality".to_string()]));
    }

    #[test]
    fn test_item_level_unknown_keys_survive() {
        let map = json!({
            "features": [{ "title": "A", "description": "B", "icon": "Zap", "badge": "new" }]
        });
        let content = SectionContent::from_map(SectionType::Features, map.as_object().unwrap().clone()).unwrap();
        let back = content.to_map().unwrap();
        assert_eq!(back["features"][0]["badge"], json!("new"));

        let map = json!({
            "sections": [
                { "type": "mission", "title": "M", "iconColor": "#111", "ribbon": 1 },
                { "type": "values", "title": "V", "values": ["x"], "layout": "grid" }
            ]
        });
        let content = SectionContent::from_map(SectionType::About, map.as_object().unwrap().clone()).unwrap();
        let SectionContent::About(about) = &content else {
            panic!("expected about content");
        };
        assert_eq!(about.sections[0].colors().icon_color.as_deref(), Some("#111"));

        let back = content.to_map().unwrap();
        assert_eq!(back["sections"][0]["ribbon"], json!(1));
        assert_eq!(back["sections"][0]["type"], json!("mission"));
        assert!(back["sections"][0].get("iconColor").is_some());
        assert_eq!(back["sections"][1]["layout"], json!("grid"));

        let map = json!({
            "sections": [
                { "type": "links", "title": "L", "values": [{ "text": "Home", "url": "#", "isLink": true, "target": "_blank" }] },
                { "type": "social", "title": "S", "socialLinks": [{ "platform": "GitHub", "url": "", "icon": "Github", "handle": "@acme" }] }
            ]
        });
        let content = SectionContent::from_map(SectionType::Footer, map.as_object().unwrap().clone()).unwrap();
        let back = content.to_map().unwrap();
        assert_eq!(back["sections"][0]["values"][0]["target"], json!("_blank"));
        assert_eq!(back["sections"][1]["socialLinks"][0]["handle"], json!("@acme"));
    }

    #[test]
    fn test_social_link_icon_must_match_platform() {
        let mismatched = json!({ "platform": "GitHub", "url": "", "icon": "Twitter" });
        assert!(serde_json::from_value::<SocialLink>(mismatched).is_err());

        let map = json!({
            "sections": [{ "type": "social", "socialLinks": [{ "platform": "GitHub", "icon": "Twitter" }] }]
        });
        let err = SectionContent::from_map(SectionType::Footer, map.as_object().unwrap().clone());
        assert!(matches!(err, Err(ModelError::InvalidContent { .. })));

        let link: SocialLink = serde_json::from_value(json!({ "platform": "LinkedIn" })).unwrap();
        assert_eq!(link.icon, SocialIcon::Linkedin);
    }

    #[test]
    fn test_social_link_platform_switch() {
        let mut link = SocialLink::for_platform(SocialPlatform::Twitter);
        link.set_platform(SocialPlatform::GitHub);
        assert_eq!(link.icon, SocialIcon::Github);

        let value = serde_json::to_value(&link).unwrap();
        assert_eq!(value["platform"], "GitHub");
        assert_eq!(value["icon"], "Github");
    }
}
