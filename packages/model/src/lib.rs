//! # Site Builder Model
//!
//! Document model for single-page sites assembled from section templates.
//!
//! ```text
//! catalog ──instantiate──▶ Section { id, type, order, core fields, content }
//!                                      │
//!                          WebsiteConfig { id, name, sections, timestamps }
//! ```
//!
//! `content` is a typed record per section type ([`SectionContent`]);
//! display fields resolve content key, then top-level field, then a
//! built-in default ([`Section::resolve`]).

pub mod catalog;
pub mod content;
pub mod error;
pub mod icons;
pub mod id_generator;
pub mod section;
pub mod website;

pub use catalog::{catalog, template, SectionTemplate, TemplateDefaults};
pub use content::{
    AboutBlock, AboutContent, BlockColors, ContactContent, ContactItem, Extra, Feature, FeaturesContent,
    FooterBlock, FooterContent, FooterEntry, HeaderContent, HeroContent, MenuItem, SectionContent,
    SocialLink,
};
pub use error::{ModelError, ModelResult};
pub use icons::{AboutIcon, ContactIcon, FeatureIcon, LibraryIcon, SocialIcon, SocialPlatform};
pub use id_generator::SectionIdGenerator;
pub use section::{sort_by_order, Section, SectionType, WireSection};
pub use website::{WebsiteConfig, DEFAULT_SITE_NAME};
