//! Closed icon sets.
//!
//! Each editing context offers its own fixed list of icon names. They are
//! plain enums so an unsupported name is rejected when a document is read,
//! not when it is rendered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! icon_set {
    ($(#[$meta:meta])* $name:ident { $($variant:ident $(as $alias:literal)?),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[serde(alias = $alias)])?
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(
                        stringify!($variant) $(| $alias)? => Ok($name::$variant),
                    )+
                    other => Err(format!(
                        "unsupported {} '{}'",
                        stringify!($name),
                        other
                    )),
                }
            }
        }
    };
}

icon_set! {
    /// Icons offered for feature cards.
    FeatureIcon { Check, Zap, Star, Shield }
}

impl Default for FeatureIcon {
    fn default() -> Self {
        FeatureIcon::Check
    }
}

icon_set! {
    /// Icons offered for about-section blocks.
    AboutIcon {
        Target,
        Users,
        Heart,
        Star,
        Award,
        Lightbulb,
        Shield,
        Globe,
        Zap,
        Check,
    }
}

impl Default for AboutIcon {
    fn default() -> Self {
        AboutIcon::Target
    }
}

icon_set! {
    /// Icons offered for contact items.
    ContactIcon {
        Mail,
        Phone,
        MapPin,
        Clock,
        Globe,
        MessageCircle,
        Building,
        User,
        Calendar,
    }
}

impl Default for ContactIcon {
    fn default() -> Self {
        ContactIcon::Mail
    }
}

icon_set! {
    /// Social platforms a footer can link to.
    SocialPlatform {
        Twitter,
        Facebook,
        LinkedIn as "Linkedin",
        Instagram,
        YouTube as "Youtube",
        GitHub as "Github",
    }
}

icon_set! {
    /// Glyph names used for social links. One per platform.
    SocialIcon {
        Twitter,
        Facebook,
        Linkedin,
        Instagram,
        Youtube,
        Github,
    }
}

icon_set! {
    /// Icons shown next to templates in the section library.
    LibraryIcon { Menu, Star, Zap, Users, Mail, Heart }
}

impl SocialPlatform {
    pub fn icon(&self) -> SocialIcon {
        match self {
            SocialPlatform::Twitter => SocialIcon::Twitter,
            SocialPlatform::Facebook => SocialIcon::Facebook,
            SocialPlatform::LinkedIn => SocialIcon::Linkedin,
            SocialPlatform::Instagram => SocialIcon::Instagram,
            SocialPlatform::YouTube => SocialIcon::Youtube,
            SocialPlatform::GitHub => SocialIcon::Github,
        }
    }

    /// Brand color used as the icon background in new links.
    pub fn brand_color(&self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "#1DA1F2",
            SocialPlatform::Facebook => "#1877F2",
            SocialPlatform::LinkedIn => "#0077B5",
            SocialPlatform::Instagram => "#C13584",
            SocialPlatform::YouTube => "#FF0000",
            SocialPlatform::GitHub => "#24292E",
        }
    }

    pub fn home_url(&self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "https://twitter.com",
            SocialPlatform::Facebook => "https://facebook.com",
            SocialPlatform::LinkedIn => "https://linkedin.com",
            SocialPlatform::Instagram => "https://instagram.com",
            SocialPlatform::YouTube => "https://youtube.com",
            SocialPlatform::GitHub => "https://github.com",
        }
    }
}
