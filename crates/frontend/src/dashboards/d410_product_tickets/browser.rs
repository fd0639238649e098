//! Побочные эффекты виджетов в браузере: перезагрузка страницы, письмо в
//! поддержку, передача данных treemap в график.
//!
//! Результат никто не ждёт: вызывающий пишет ошибку в лог и идёт дальше.

use super::chart_options::TreemapChart;
use super::config::WidgetConfig;
use js_sys::{Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Глобальная функция страницы, рисующая treemap:
/// `window.renderTreemap(elementId, { series, options })`
pub const CHART_SURFACE_FN: &str = "renderTreemap";

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("browser window is not available")]
    WindowUnavailable,
    #[error("chart surface `{0}` is not registered on window")]
    ChartSurfaceMissing(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

fn window() -> Result<web_sys::Window, BrowserError> {
    web_sys::window().ok_or(BrowserError::WindowUnavailable)
}

/// Полная перезагрузка страницы
pub fn reload() -> Result<(), BrowserError> {
    window()?.location().reload()?;
    Ok(())
}

/// Открывает письмо в поддержку виджета в новом окне
pub fn contact_support(config: &WidgetConfig) -> Result<(), BrowserError> {
    window()?.open_with_url_and_target(&config.mailto_url(), "_blank")?;
    Ok(())
}

pub fn render_treemap(element_id: &str, chart: &TreemapChart) -> Result<(), BrowserError> {
    let window = window()?;
    let render_value = Reflect::get(&window, &JsValue::from_str(CHART_SURFACE_FN))?;
    if !render_value.is_function() {
        return Err(BrowserError::ChartSurfaceMissing(CHART_SURFACE_FN));
    }
    let render_fn: Function = render_value.dyn_into()?;

    let payload = chart
        .serialize(&Serializer::json_compatible())
        .map_err(|err| BrowserError::Js(err.to_string()))?;

    render_fn.call2(&window, &JsValue::from_str(element_id), &payload)?;
    Ok(())
}
