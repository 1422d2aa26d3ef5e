//! # Section template catalog
//!
//! Fixed, ordered list of templates, one per [`SectionType`]. A template
//! seeds a freshly created section: its defaults are copied into the new
//! section's top-level fields and content record.
//!
//! Per-type color overrides live in the content record, which is where
//! the content editor reads and writes them.

use crate::content::*;
use crate::icons::{AboutIcon, ContactIcon, FeatureIcon, LibraryIcon, SocialPlatform};
use crate::section::{Section, SectionType};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Library entry used to instantiate a section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTemplate {
    pub section_type: SectionType,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: LibraryIcon,
    pub default_content: TemplateDefaults,
}

/// Seed values copied into a new section.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDefaults {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub content: SectionContent,
}

impl SectionTemplate {
    /// Build a new section from this template. Pure: the caller supplies
    /// the id and the order (the current collection size).
    pub fn instantiate(&self, id: impl Into<String>, order: u32) -> Section {
        let defaults = &self.default_content;

        Section {
            id: id.into(),
            section_type: self.section_type,
            order,
            title: defaults
                .title
                .clone()
                .unwrap_or_else(|| self.title.to_string()),
            description: defaults.description.clone(),
            image_url: defaults.image_url.clone(),
            background_color: defaults.background_color.clone(),
            text_color: defaults.text_color.clone(),
            overrides: BTreeMap::new(),
            content: defaults.content.clone(),
        }
    }
}

/// All templates, in library order.
pub fn catalog() -> &'static [SectionTemplate] {
    static CATALOG: OnceLock<Vec<SectionTemplate>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

/// Template for a type. Every type has exactly one.
pub fn template(section_type: SectionType) -> &'static SectionTemplate {
    let templates = catalog();
    let index = SectionType::ALL
        .iter()
        .position(|t| *t == section_type)
        .unwrap_or_default();
    &templates[index]
}

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn build_catalog() -> Vec<SectionTemplate> {
    vec![
        header_template(),
        hero_template(),
        features_template(),
        about_template(),
        contact_template(),
        footer_template(),
    ]
}

fn header_template() -> SectionTemplate {
    SectionTemplate {
        section_type: SectionType::Header,
        title: "Header",
        description: "Navigation header with logo and menu",
        icon: LibraryIcon::Menu,
        default_content: TemplateDefaults {
            title: s("My Website"),
            description: None,
            image_url: None,
            background_color: s("#ffffff"),
            text_color: None,
            content: SectionContent::Header(HeaderContent {
                logo: s("My Brand"),
                logo_image: s(""),
                menu_items: vec![
                    MenuItem::new("Home", "#home"),
                    MenuItem::new("About", "#about"),
                    MenuItem::new("Services", "#services"),
                    MenuItem::new("Contact", "#contact"),
                ],
                logo_text_color: s("#000000"),
                menu_color: s("#000000"),
                background_color: None,
                rounded_image: Some(100),
                extra: Extra::new(),
            }),
        },
    }
}

fn hero_template() -> SectionTemplate {
    SectionTemplate {
        section_type: SectionType::Hero,
        title: "Hero Section",
        description: "Main banner with call-to-action",
        icon: LibraryIcon::Star,
        default_content: TemplateDefaults {
            title: s("Welcome to Our Website"),
            description: s("Create something amazing with our powerful tools"),
            image_url: None,
            background_color: s("#f8fafc"),
            text_color: None,
            content: SectionContent::Hero(HeroContent {
                cta_text: s("Get Started"),
                cta_link: s("#"),
                overlay_color: s("#000000"),
                overlay_opacity: Some(DEFAULT_OVERLAY_OPACITY),
                title_color: s("#fff"),
                description_color: s("#fff"),
                button_text_color: s("#fff"),
                button_background_color: s("#145dfb"),
                ..HeroContent::default()
            }),
        },
    }
}

fn features_template() -> SectionTemplate {
    SectionTemplate {
        section_type: SectionType::Features,
        title: "Features",
        description: "Showcase your key features or services",
        icon: LibraryIcon::Zap,
        default_content: TemplateDefaults {
            title: s("Our Features"),
            description: s("Discover what makes us special"),
            image_url: None,
            background_color: s("#ffffff"),
            text_color: s("#1e293b"),
            content: SectionContent::Features(FeaturesContent {
                features: vec![
                    Feature::new("Feature 1", "Amazing feature description", FeatureIcon::Check),
                    Feature::new("Feature 2", "Another great feature", FeatureIcon::Zap),
                    Feature::new("Feature 3", "The best feature ever", FeatureIcon::Star),
                ],
                title_color: s("#000"),
                description_color: s("#1e293b"),
                card_color: s("#ffffff"),
                card_title_color: s("#000"),
                card_description_color: s("#666"),
                card_icon_color: s("#3b82f6"),
                card_icon_background_color: s("#dbeafe"),
                ..FeaturesContent::default()
            }),
        },
    }
}

fn block_colors() -> BlockColors {
    BlockColors {
        title_color: s("#000"),
        icon_color: s("#3b82f6"),
        icon_background_color: s("#dbeafe"),
    }
}

fn about_template() -> SectionTemplate {
    SectionTemplate {
        section_type: SectionType::About,
        title: "About",
        description: "Tell your story and mission",
        icon: LibraryIcon::Users,
        default_content: TemplateDefaults {
            title: s("About Us"),
            description: s("We are passionate about creating amazing experiences"),
            image_url: s("https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=800&h=600&fit=crop"),
            background_color: s("#f1f5f9"),
            text_color: s("#1e293b"),
            content: SectionContent::About(AboutContent {
                title_color: s("#000"),
                description_color: s("#1e293b"),
                sections: vec![
                    AboutBlock::Mission {
                        title: "Our Mission".to_string(),
                        description: "To provide the best solutions for our customers".to_string(),
                        icon: AboutIcon::Target,
                        description_color: s("#666"),
                        colors: block_colors(),
                        extra: Extra::new(),
                    },
                    AboutBlock::Values {
                        title: "Our Values".to_string(),
                        values: vec![
                            "Innovation".to_string(),
                            "Quality".to_string(),
                            "Customer Focus".to_string(),
                        ],
                        icon: AboutIcon::Users,
                        values_color: s("#666"),
                        colors: block_colors(),
                        extra: Extra::new(),
                    },
                ],
                ..AboutContent::default()
            }),
        },
    }
}

fn contact_item(title: &str, subtitle: &str, icon: ContactIcon) -> ContactItem {
    ContactItem {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        icon,
        icon_color: s("#3b82f6"),
        icon_background_color: s("#dbeafe"),
        title_color: s("#000000"),
        subtitle_color: s("#666666"),
        extra: Extra::new(),
    }
}

fn contact_template() -> SectionTemplate {
    SectionTemplate {
        section_type: SectionType::Contact,
        title: "Contact",
        description: "Contact form and information",
        icon: LibraryIcon::Mail,
        default_content: TemplateDefaults {
            title: s("Get In Touch"),
            description: s("We'd love to hear from you"),
            image_url: None,
            background_color: s("#ffffff"),
            text_color: s("#1e293b"),
            content: SectionContent::Contact(ContactContent {
                title_color: s("#000"),
                description_color: s("#666"),
                button_text_color: s("#fff"),
                button_background_color: s("#145dfb"),
                contact_items: vec![
                    contact_item("Email", "contact@example.com", ContactIcon::Mail),
                    contact_item("Phone", "+1 (555) 123-4567", ContactIcon::Phone),
                    contact_item("Address", "123 Main St, City, State 12345", ContactIcon::MapPin),
                ],
                ..ContactContent::default()
            }),
        },
    }
}

fn footer_template() -> SectionTemplate {
    SectionTemplate {
        section_type: SectionType::Footer,
        title: "Footer",
        description: "Footer with links and social media",
        icon: LibraryIcon::Heart,
        default_content: TemplateDefaults {
            title: s("Footer"),
            description: None,
            image_url: None,
            background_color: s("#1e293b"),
            text_color: s("#ffffff"),
            content: SectionContent::Footer(FooterContent {
                copyright: s("© 2024 My Website. All rights reserved."),
                background_color: None,
                sections: vec![
                    FooterBlock::Description {
                        title: "Footer".to_string(),
                        subtitle: "Creating amazing digital experiences with modern web technologies."
                            .to_string(),
                        title_color: s("#ffffff"),
                        subtitle_color: s("#cbd5e1"),
                        extra: Extra::new(),
                    },
                    FooterBlock::Links {
                        title: "Quick Links".to_string(),
                        values: vec![
                            FooterEntry::link("Home", "#home"),
                            FooterEntry::link("About", "#about"),
                            FooterEntry::link("Services", "#services"),
                            FooterEntry::link("Contact", "#contact"),
                        ],
                        title_color: s("#ffffff"),
                        values_color: s("#cbd5e1"),
                        extra: Extra::new(),
                    },
                    FooterBlock::Contact {
                        title: "Contact".to_string(),
                        values: vec![
                            FooterEntry::link("contact@example.com", "mailto:contact@example.com"),
                            FooterEntry::link("+1 (555) 123-4567", "tel:+15551234567"),
                            FooterEntry::plain("123 Main St, City, State"),
                        ],
                        title_color: s("#ffffff"),
                        values_color: s("#cbd5e1"),
                        extra: Extra::new(),
                    },
                    FooterBlock::Social {
                        title: "Follow Us".to_string(),
                        social_links: SocialPlatform::ALL
                            .iter()
                            .map(|p| SocialLink::for_platform(*p))
                            .collect(),
                        title_color: s("#ffffff"),
                        extra: Extra::new(),
                    },
                ],
                extra: Extra::new(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_template_per_type_in_order() {
        let types: Vec<_> = catalog().iter().map(|t| t.section_type).collect();
        assert_eq!(types, SectionType::ALL.to_vec());
    }

    #[test]
    fn test_template_lookup_is_exact() {
        for section_type in SectionType::ALL {
            assert_eq!(template(section_type).section_type, section_type);
        }
    }

    #[test]
    fn test_instantiate_copies_defaults() {
        for tpl in catalog() {
            let section = tpl.instantiate("id-1", 7);
            assert_eq!(section.section_type, tpl.section_type);
            assert_eq!(section.order, 7);
            assert_eq!(section.id, "id-1");

            let expected = tpl.default_content.content.to_map().unwrap();
            let actual = section.content_map().unwrap();
            for key in expected.keys() {
                assert!(actual.contains_key(key), "{} content missing {}", tpl.section_type, key);
            }
        }
    }

    #[test]
    fn test_footer_social_links_cover_all_platforms() {
        let section = template(SectionType::Footer).instantiate("f", 0);
        let SectionContent::Footer(footer) = section.content else {
            panic!("expected footer content");
        };
        let social = footer
            .sections
            .iter()
            .find_map(|b| match b {
                FooterBlock::Social { social_links, .. } => Some(social_links.len()),
                _ => None,
            })
            .unwrap();
        assert_eq!(social, SocialPlatform::ALL.len());
    }
}
