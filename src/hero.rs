//! DOM side of the hero: applies [`HeroFrame`]s to the title, captions, side
//! blocks and, for the CSS variant, the rotating SVG chair.

use crate::core::css;
use crate::core::fade::FadeEvent;
use crate::core::reveal::RevealFrame;
use crate::core::{HeroFrame, HeroVariant};
use crate::dom::set_style;
use crate::page::HeroElements;
use web_sys as web;

/// Side-on chair silhouette used by the CSS hero.
pub const CHAIR_SVG: &str = concat!(
    "<svg viewBox=\"0 0 200 260\" width=\"100%\" height=\"100%\" aria-hidden=\"true\">",
    "<rect x=\"55\" y=\"10\" width=\"90\" height=\"24\" rx=\"10\" fill=\"#db6694\"/>",
    "<rect x=\"48\" y=\"38\" width=\"104\" height=\"96\" rx=\"18\" fill=\"#f59ebf\"/>",
    "<rect x=\"64\" y=\"104\" width=\"72\" height=\"18\" rx=\"8\" fill=\"#db6694\"/>",
    "<rect x=\"40\" y=\"140\" width=\"120\" height=\"22\" rx=\"10\" fill=\"#f59ebf\"/>",
    "<rect x=\"28\" y=\"118\" width=\"16\" height=\"6\" rx=\"3\" fill=\"#38383f\"/>",
    "<rect x=\"156\" y=\"118\" width=\"16\" height=\"6\" rx=\"3\" fill=\"#38383f\"/>",
    "<rect x=\"95\" y=\"162\" width=\"10\" height=\"52\" fill=\"#38383f\"/>",
    "<path d=\"M40 224 L100 212 L160 224\" stroke=\"#c7c9d1\" stroke-width=\"8\" fill=\"none\" stroke-linecap=\"round\"/>",
    "<circle cx=\"40\" cy=\"234\" r=\"8\" fill=\"#38383f\"/>",
    "<circle cx=\"100\" cy=\"230\" r=\"8\" fill=\"#38383f\"/>",
    "<circle cx=\"160\" cy=\"234\" r=\"8\" fill=\"#38383f\"/>",
    "</svg>"
);

pub fn apply_reveal(element: &web::HtmlElement, frame: RevealFrame) {
    set_style(element, "opacity", &format!("{:.3}", frame.opacity));
    set_style(
        element,
        "transform",
        &format!(
            "translateY({:.2}px) scale({:.4})",
            frame.offset_y_px, frame.scale
        ),
    );
}

/// Show the stage for `variant` and hide the other one.
pub fn show_variant(elements: &HeroElements, variant: HeroVariant) {
    let (canvas_display, stage_display) = match variant {
        HeroVariant::Canvas => ("block", "none"),
        HeroVariant::Css => ("none", "flex"),
    };
    _ = elements.canvas.style().set_property("display", canvas_display);
    set_style(&elements.css_stage, "display", stage_display);
}

pub fn apply_frame(
    elements: &HeroElements,
    frame: &HeroFrame,
    variant: HeroVariant,
    captions: &[String],
    intro: RevealFrame,
) {
    // Intro plays first; afterwards the scroll fade takes over.
    let title_opacity = intro.opacity * frame.params.opacity;
    set_style(&elements.title, "opacity", &format!("{:.3}", title_opacity));
    set_style(
        &elements.title,
        "transform",
        &format!(
            "translate(-50%, {:.2}px)",
            intro.offset_y_px - frame.params.offset_px
        ),
    );
    set_style(
        &elements.nav,
        "opacity",
        &format!("{:.3}", frame.params.opacity),
    );

    if variant == HeroVariant::Css {
        let deg = frame.params.rotation_deg;
        set_style(&elements.css_chair, "transform", &css::rotation_transform(deg));
        set_style(
            &elements.css_chair,
            "filter",
            &format!("brightness({:.3})", css::backface_brightness(deg)),
        );
    }

    if let Some(FadeEvent::Show(index)) = frame.caption_event {
        let text = captions.get(index).map(String::as_str).unwrap_or("");
        elements.caption.set_text_content(Some(text));
        log::debug!("[hero] caption -> {}", index);
    }
    set_style(
        &elements.caption,
        "opacity",
        &format!("{:.3}", frame.caption_opacity),
    );

    for (element, block) in elements.blocks.iter().zip(frame.blocks.iter()) {
        if !block.changed {
            continue;
        }
        set_style(element, "opacity", &format!("{:.3}", block.opacity));
        set_style(
            element,
            "transform",
            &format!("translate({:.2}px, -50%)", block.offset_x_px),
        );
    }
}
