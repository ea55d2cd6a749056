//! Glint Gallery - Main Entry Point
//!
//! Renders every component with sample inputs into a single HTML page.
//! Usage: `glint-gallery [OUTPUT.html]` (stdout when no path is given).

use std::fs;

use anyhow::Context;
use glint_ui::components::charts::{BarChart, ChartDatum};
use glint_ui::components::effects::{GlitchText, GlitchVariant, RevealVariant, TextReveal};
use glint_ui::components::navigation::{BreadcrumbItem, Breadcrumbs};
use glint_ui::components::primitives::{ButtonVariant, GlintButton};
use glint_ui::components::ElementRegistry;
use glint_ui::config::ThemeConfig;
use glint_ui::host::Document;
use glint_ui::utils::config_store;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Building Glint gallery...");

    let theme = config_store::load_theme().unwrap_or_else(|e| {
        tracing::warn!("Falling back to default theme: {e}");
        ThemeConfig::default()
    });
    let mut doc = Document::new(ElementRegistry::with_defaults(), theme);

    for variant in [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
        ButtonVariant::Gradient,
    ] {
        doc.append(Box::new(GlintButton::new(variant.as_str()).variant(variant)));
    }
    doc.append(Box::new(GlintButton::primary("Disabled").disabled(true)));

    let sales = vec![
        ChartDatum::new("A", 65.0),
        ChartDatum::new("B", 85.0),
        ChartDatum::new("C", 45.0),
    ];
    doc.append(Box::new(BarChart::new(sales.clone()).title("Quarterly sales")));
    doc.append(Box::new(BarChart::new(sales).horizontal(true).max(100.0)));

    doc.append(Box::new(
        Breadcrumbs::new(vec![
            BreadcrumbItem::link("Home", "/"),
            BreadcrumbItem::link("Products", "/products"),
            BreadcrumbItem::link("Electronics", "/products/electronics"),
            BreadcrumbItem::new("Smartphones"),
        ])
        .animated(true),
    ));

    let reveal = doc.append(Box::new(
        TextReveal::new("Hello from Glint").variant(RevealVariant::SlideUp),
    ));
    for variant in [GlitchVariant::Classic, GlitchVariant::RgbSplit, GlitchVariant::Vhs] {
        doc.append(Box::new(GlitchText::new("SIGNAL LOST").variant(variant).active(true)));
    }

    // Static page: everything is already in view
    doc.advance_frame();
    doc.with_element_mut::<TextReveal, _>(reveal, |r| r.set_trigger(true));
    for id in doc.ids() {
        doc.simulate_intersection(id, 1.0);
    }

    let page = doc.render_page("Glint UI Gallery");
    match std::env::args().nth(1) {
        Some(path) => {
            fs::write(&path, page).with_context(|| format!("writing {path}"))?;
            tracing::info!("Gallery written to {path}");
        }
        None => println!("{page}"),
    }

    Ok(())
}
