//! One HTML block per section type.
//!
//! Display fields go through [`Section::resolve`] so a content key wins
//! over the top-level field, which wins over the built-in default.

use crate::context::{Attrs, Context, Style};
use sitebuilder_model::{
    AboutBlock, AboutContent, ContactContent, FeaturesContent, FooterBlock, FooterContent,
    FooterEntry, HeaderContent, HeroContent, MenuItem, Section, SectionContent,
};

const DEFAULT_MENU: [&str; 4] = ["Home", "About", "Services", "Contact"];

pub(crate) fn write_section(ctx: &mut Context, section: &Section) {
    match &section.content {
        SectionContent::Header(content) => write_header(ctx, section, content),
        SectionContent::Hero(content) => write_hero(ctx, section, content),
        SectionContent::Features(content) => write_features(ctx, section, content),
        SectionContent::About(content) => write_about(ctx, section, content),
        SectionContent::Contact(content) => write_contact(ctx, section, content),
        SectionContent::Footer(content) => write_footer(ctx, section, content),
    }
}

pub(crate) fn write_placeholder(ctx: &mut Context, section_type: &str) {
    ctx.text(
        "div",
        Attrs::new().class("sb-section sb-unknown"),
        &format!("Unknown section type: {}", section_type),
    );
}

/// Root element attributes shared by every section.
fn root_attrs(section: &Section, background: &str, color: &str) -> Attrs {
    let section_type = section.section_type.as_str();
    Attrs::new()
        .set("id", section.id.as_str())
        .class(format!("sb-section sb-{}", section_type))
        .set("data-section-type", section_type)
        .style(
            Style::new()
                .prop("background-color", section.resolve("backgroundColor", background))
                .prop("color", section.resolve("textColor", color)),
        )
}

fn color(value: Option<&str>) -> Style {
    Style::new().prop_opt("color", value)
}

fn icon(ctx: &mut Context, class: &str, name: &str, style: Style) {
    ctx.text(
        "span",
        Attrs::new().class(class).set("data-icon", name).style(style),
        "",
    );
}

fn write_header(ctx: &mut Context, section: &Section, content: &HeaderContent) {
    ctx.open("header", root_attrs(section, "#ffffff", "#000000"));
    ctx.open("div", Attrs::new().class("sb-header__inner"));

    let logo = section.resolve("logo", "My Brand");
    match section.resolve_opt("logoImage") {
        Some(src) => {
            let rounded = content.rounded_image.unwrap_or(0).min(100);
            let style = if rounded > 0 {
                Style::new().prop("border-radius", format!("{}%", rounded))
            } else {
                Style::new()
            };
            ctx.void(
                "img",
                Attrs::new()
                    .class("sb-header__logo")
                    .set("src", src)
                    .set("alt", logo)
                    .style(style),
            );
        }
        None => ctx.text(
            "h1",
            Attrs::new()
                .class("sb-header__logo")
                .style(color(section.resolve_opt("logoTextColor"))),
            logo,
        ),
    }

    ctx.open("nav", Attrs::new().class("sb-header__menu"));
    let defaults: Vec<MenuItem>;
    let items = if content.menu_items.is_empty() {
        defaults = DEFAULT_MENU
            .iter()
            .map(|text| MenuItem::new(*text, format!("#{}", text.to_lowercase())))
            .collect();
        &defaults
    } else {
        &content.menu_items
    };
    let menu_color = section.resolve_opt("menuColor");
    for item in items {
        ctx.text(
            "a",
            Attrs::new().set("href", item.url.as_str()).style(color(menu_color)),
            &item.text,
        );
    }
    ctx.close("nav");

    icon(ctx, "sb-header__toggle", "Menu", color(menu_color));
    ctx.close("div");
    ctx.close("header");
}

fn write_hero(ctx: &mut Context, section: &Section, content: &HeroContent) {
    ctx.open("section", root_attrs(section, "#f8fafc", "#1e293b"));

    if let Some(src) = section.resolve_opt("imageUrl") {
        ctx.void(
            "img",
            Attrs::new()
                .class("sb-hero__image")
                .set("src", src)
                .set("alt", "Hero background"),
        );
    }

    ctx.text(
        "div",
        Attrs::new().class("sb-hero__overlay").style(
            Style::new()
                .prop("background-color", section.resolve("overlayColor", "#000000"))
                .prop("opacity", content.overlay_alpha().to_string()),
        ),
        "",
    );

    ctx.open("div", Attrs::new().class("sb-hero__content"));
    ctx.text(
        "h1",
        Attrs::new().style(color(section.resolve_opt("titleColor"))),
        section.resolve("title", "Welcome to Our Website"),
    );
    if let Some(description) = section.resolve_opt("description") {
        ctx.text(
            "p",
            Attrs::new().style(color(section.resolve_opt("descriptionColor"))),
            description,
        );
    }
    ctx.open(
        "a",
        Attrs::new()
            .class("sb-hero__cta")
            .set("href", section.resolve("ctaLink", "#"))
            .style(
                Style::new()
                    .prop_opt("color", section.resolve_opt("buttonTextColor"))
                    .prop_opt("background-color", section.resolve_opt("buttonBackgroundColor")),
            ),
    );
    ctx.text("span", Attrs::new(), section.resolve("ctaText", "Get Started"));
    icon(ctx, "sb-icon", "ArrowRight", Style::new());
    ctx.close("a");
    ctx.close("div");

    ctx.close("section");
}

fn write_features(ctx: &mut Context, section: &Section, content: &FeaturesContent) {
    ctx.open("section", root_attrs(section, "#ffffff", "#1e293b"));
    write_heading(ctx, section, "Our Features");

    let card_background = section.resolve_opt("cardColor");
    let card_title = section.resolve_opt("cardTitleColor");
    let card_description = section.resolve_opt("cardDescriptionColor");
    let icon_color = section.resolve_opt("cardIconColor");
    let icon_background = section.resolve_opt("cardIconBackgroundColor");

    ctx.open("div", Attrs::new().class("sb-features__grid"));
    for feature in &content.features {
        ctx.open(
            "div",
            Attrs::new().class("sb-features__card").style(
                Style::new().prop_opt("background-color", card_background),
            ),
        );
        icon(
            ctx,
            "sb-icon",
            feature.icon.as_str(),
            Style::new()
                .prop_opt("color", icon_color)
                .prop_opt("background-color", icon_background),
        );
        ctx.text("h3", Attrs::new().style(color(card_title)), &feature.title);
        ctx.text("p", Attrs::new().style(color(card_description)), &feature.description);
        ctx.close("div");
    }
    ctx.close("div");

    ctx.close("section");
}

fn write_about(ctx: &mut Context, section: &Section, content: &AboutContent) {
    ctx.open("section", root_attrs(section, "#f1f5f9", "#1e293b"));
    write_heading(ctx, section, "About Us");

    if let Some(src) = section.resolve_opt("imageUrl") {
        ctx.void(
            "img",
            Attrs::new()
                .class("sb-about__image")
                .set("src", src)
                .set("alt", section.resolve("title", "About Us")),
        );
    }

    ctx.open("div", Attrs::new().class("sb-about__blocks"));
    for block in &content.sections {
        let colors = block.colors();
        ctx.open("div", Attrs::new().class("sb-about__block"));
        icon(
            ctx,
            "sb-icon",
            block.icon().as_str(),
            Style::new()
                .prop_opt("color", colors.icon_color.as_deref())
                .prop_opt("background-color", colors.icon_background_color.as_deref()),
        );
        ctx.text("h3", Attrs::new().style(color(colors.title_color.as_deref())), block.title());

        match block {
            AboutBlock::Mission {
                description,
                description_color,
                ..
            } => ctx.text("p", Attrs::new().style(color(description_color.as_deref())), description),
            AboutBlock::Values {
                values, values_color, ..
            } => {
                ctx.open("ul", Attrs::new().style(color(values_color.as_deref())));
                for value in values {
                    ctx.text("li", Attrs::new(), value);
                }
                ctx.close("ul");
            }
        }
        ctx.close("div");
    }
    ctx.close("div");

    ctx.close("section");
}

fn write_contact(ctx: &mut Context, section: &Section, content: &ContactContent) {
    ctx.open("section", root_attrs(section, "#ffffff", "#1e293b"));
    write_heading(ctx, section, "Get In Touch");

    ctx.open("div", Attrs::new().class("sb-contact__items"));
    for item in &content.contact_items {
        ctx.open("div", Attrs::new().class("sb-contact__item"));
        icon(
            ctx,
            "sb-icon",
            item.icon.as_str(),
            Style::new()
                .prop_opt("color", item.icon_color.as_deref())
                .prop_opt("background-color", item.icon_background_color.as_deref()),
        );
        ctx.text("h3", Attrs::new().style(color(item.title_color.as_deref())), &item.title);
        ctx.text("p", Attrs::new().style(color(item.subtitle_color.as_deref())), &item.subtitle);
        ctx.close("div");
    }
    ctx.close("div");

    ctx.text(
        "a",
        Attrs::new()
            .class("sb-contact__button")
            .set("href", section.resolve("buttonLink", "#contact"))
            .style(
                Style::new()
                    .prop_opt("color", section.resolve_opt("buttonTextColor"))
                    .prop_opt("background-color", section.resolve_opt("buttonBackgroundColor")),
            ),
        section.resolve("buttonText", "Send Message"),
    );

    ctx.close("section");
}

fn write_footer(ctx: &mut Context, section: &Section, content: &FooterContent) {
    ctx.open("footer", root_attrs(section, "#1e293b", "#ffffff"));

    ctx.open("div", Attrs::new().class("sb-footer__blocks"));
    for block in &content.sections {
        ctx.open("div", Attrs::new().class("sb-footer__block"));
        ctx.text("h3", Attrs::new().style(color(block.title_color())), block.title());

        match block {
            FooterBlock::Description {
                subtitle,
                subtitle_color,
                ..
            } => ctx.text("p", Attrs::new().style(color(subtitle_color.as_deref())), subtitle),
            FooterBlock::Links {
                values, values_color, ..
            }
            | FooterBlock::Contact {
                values, values_color, ..
            } => write_entries(ctx, values, values_color.as_deref()),
            FooterBlock::Social { social_links, .. } => {
                ctx.open("div", Attrs::new().class("sb-footer__social"));
                for link in social_links {
                    let href = if link.url.is_empty() {
                        link.platform.home_url()
                    } else {
                        link.url.as_str()
                    };
                    ctx.open(
                        "a",
                        Attrs::new()
                            .set("href", href)
                            .set("aria-label", link.platform.as_str())
                            .style(
                                Style::new().prop(
                                    "background-color",
                                    link.icon_background_color
                                        .as_deref()
                                        .unwrap_or(link.platform.brand_color()),
                                ),
                            ),
                    );
                    icon(
                        ctx,
                        "sb-icon",
                        link.icon.as_str(),
                        Style::new().prop("color", link.icon_color.as_deref().unwrap_or("#ffffff")),
                    );
                    ctx.close("a");
                }
                ctx.close("div");
            }
        }
        ctx.close("div");
    }
    ctx.close("div");

    ctx.text(
        "p",
        Attrs::new().class("sb-footer__copyright"),
        section.resolve("copyright", "© 2024 My Website. All rights reserved."),
    );
    ctx.close("footer");
}

fn write_entries(ctx: &mut Context, entries: &[FooterEntry], values_color: Option<&str>) {
    ctx.open("ul", Attrs::new().style(color(values_color)));
    for entry in entries {
        if entry.is_link && !entry.url.is_empty() {
            ctx.open("li", Attrs::new());
            ctx.text("a", Attrs::new().set("href", entry.url.as_str()), &entry.text);
            ctx.close("li");
        } else {
            ctx.text("li", Attrs::new(), &entry.text);
        }
    }
    ctx.close("ul");
}

/// Section title and optional description.
fn write_heading(ctx: &mut Context, section: &Section, default_title: &str) {
    let title = section.resolve("title", default_title);
    ctx.text("h2", Attrs::new().style(color(section.resolve_opt("titleColor"))), title);
    if let Some(description) = section.resolve_opt("description") {
        ctx.text(
            "p",
            Attrs::new().style(color(section.resolve_opt("descriptionColor"))),
            description,
        );
    }
}
