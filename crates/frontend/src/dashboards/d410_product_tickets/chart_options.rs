//! Настройки treemap в том виде, который ждёт ApexCharts.

use super::projection::{ChartPoint, ChartSeries};
use contracts::dashboards::d410_product_tickets::TicketType;
use serde::Serialize;

pub const CHART_HEIGHT: u32 = 350;

pub const PALETTE: [&str; 12] = [
    "#3B93A5", "#F7B844", "#ADD8C7", "#EC3C65", "#CDD7B6", "#C1F666", "#D43F97", "#1E5D8C",
    "#421243", "#7F94B0", "#EF6537", "#C0ADDB",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub show: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSection {
    pub height: u32,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: &'static str,
    pub align: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreemapPlot {
    pub distributed: bool,
    pub enable_shades: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotOptions {
    pub treemap: TreemapPlot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreemapOptions {
    pub legend: Legend,
    pub chart: ChartSection,
    pub title: Title,
    pub colors: Vec<&'static str>,
    pub plot_options: PlotOptions,
}

impl TreemapOptions {
    /// Настройки зависят только от типа тикетов, не от данных.
    pub fn for_ticket_type(ticket_type: TicketType) -> Self {
        let title = match ticket_type {
            TicketType::Sale => "Total en kilogramos de venta de cada producto",
            TicketType::Shop => "Total en kilogramos de compra de cada producto",
        };

        Self {
            legend: Legend { show: false },
            chart: ChartSection {
                height: CHART_HEIGHT,
                kind: "treemap",
            },
            title: Title {
                text: title,
                align: "center",
            },
            colors: PALETTE.to_vec(),
            plot_options: PlotOptions {
                treemap: TreemapPlot {
                    distributed: true,
                    enable_shades: false,
                },
            },
        }
    }
}

/// Одна серия данных
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesData {
    pub data: Vec<ChartPoint>,
}

/// Полный набор данных для графика
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreemapChart {
    pub series: Vec<SeriesData>,
    pub options: TreemapOptions,
}

impl TreemapChart {
    /// `None` для пустой серии: без данных рисовать нечего.
    pub fn build(ticket_type: TicketType, series: &ChartSeries) -> Option<Self> {
        if series.is_empty {
            return None;
        }

        Some(Self {
            series: vec![SeriesData {
                data: series.points.clone(),
            }],
            options: TreemapOptions::for_ticket_type(ticket_type),
        })
    }
}
