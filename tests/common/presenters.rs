//! Presenter classes declared over the test domain

use gift_wrap::models::AttributeMode;
use gift_wrap::wrapped::single_arg;
use gift_wrap::{
    AssociationSpec, Configuration, Presented, Presenter, PresenterClass, PresenterResult,
};
use serde_json::{json, Value};
use std::sync::Arc;

use super::domain::users_model;

pub fn config() -> Configuration {
    Configuration::default()
}

fn metric(presenter: &Presenter, _args: &[Value]) -> PresenterResult<Presented> {
    let units = presenter.send("units", &[])?.as_json()?;
    let metric_units = presenter.send("metric_map_units", &[])?.as_json()?;
    let is_metric = metric_units
        .as_array()
        .is_some_and(|metric_units| metric_units.contains(&units));
    Ok(json!(is_metric).into())
}

fn metric_map_units(_: &Presenter, _: &[Value]) -> PresenterResult<Presented> {
    Ok(json!(["m", "km"]).into())
}

pub fn simple_map_presenter(config: &Configuration) -> Arc<PresenterClass> {
    PresenterClass::builder("SimpleMapPresenter", config)
        .attribute("metric?")
        .unwrap_for(["type"], false)
        .unwrap_for(["units"], true)
        .method("metric?", metric)
        .method("contains_region?", |_, args| {
            single_arg("contains_region?", args)?;
            Ok(json!(false).into())
        })
        .private_method("metric_map_units", metric_map_units)
        .build()
}

fn line_meaning(presenter: &Presenter, color: &str) -> PresenterResult<Presented> {
    presenter.send("line_meaning", &[json!(color)])
}

pub fn legend_presenter(config: &Configuration) -> Arc<PresenterClass> {
    PresenterClass::builder("LegendPresenter", config)
        .unwrap_for(["line_meaning"], false)
        .attribute("red_lines")
        .method("red_lines", |p, _| line_meaning(p, "red"))
        .method("yellow_lines", |p, _| line_meaning(p, "yellow"))
        .method("green_lines", |p, _| line_meaning(p, "green"))
        .build()
}

/// Legend presenter that reports region meanings instead of lines
pub fn region_legend_presenter(config: &Configuration) -> Arc<PresenterClass> {
    PresenterClass::builder("RegionLegendPresenter", config)
        .unwrap_for(["region_meaning"], false)
        .attribute("water")
        .method("water", |p, _| p.send("region_meaning", &[json!("blue")]))
        .build()
}

pub fn legendary_map_presenter(
    config: &Configuration,
    legend: &Arc<PresenterClass>,
) -> Arc<PresenterClass> {
    PresenterClass::builder("LegendaryMapPresenter", config)
        .unwrap_for(["type", "units"], false)
        .wrap_association(AssociationSpec::new("legend", legend))
        .method("metric?", metric)
        .private_method("metric_map_units", metric_map_units)
        .build()
}

pub fn atlas_presenter(config: &Configuration, map: &Arc<PresenterClass>) -> Arc<PresenterClass> {
    PresenterClass::builder("AtlasPresenter", config)
        .unwrap_for(["title"], true)
        .wrap_association(AssociationSpec::new("maps", map).exposed_as("pages"))
        .attribute("pages")
        .build()
}

pub fn simple_user_presenter(config: &Configuration) -> Arc<PresenterClass> {
    PresenterClass::builder("SimpleUserPresenter", config)
        .unwrap_columns_for(&users_model(), AttributeMode::All)
        .unwrap_for(["initials"], false)
        .method("email_with_display_name", |p, _| {
            let field = |name: &str| -> PresenterResult<String> {
                Ok(p.send(name, &[])?
                    .as_value()
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string())
            };
            Ok(json!(format!(
                "{} {} <{}>",
                field("first_name")?,
                field("last_name")?,
                field("email")?
            ))
            .into())
        })
        .build()
}

pub fn user_presenter_with(config: &Configuration, mode: AttributeMode) -> Arc<PresenterClass> {
    PresenterClass::builder("UserPresenter", config)
        .unwrap_columns_for(&users_model(), mode)
        .build()
}
