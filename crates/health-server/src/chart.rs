//! 图表渲染与文件存取
//!
//! 用字符串拼接生成 SVG：每个变量一个面板，每个术语一条折线，
//! 实际输入值/得分用虚线标记。曲线数据直接取自推理引擎内的
//! `LinguisticVariable` 实例，渲染结果与推理使用的定义不会分叉。

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

use fuzzy_engine::{InferenceEngine, LinguisticVariable};
use health_shared::ChartConfig;

use crate::error::{Result, ServerError};

const PANEL_WIDTH: f64 = 480.0;
const PANEL_HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 52.0;
const MARGIN_RIGHT: f64 = 18.0;
const MARGIN_TOP: f64 = 34.0;
const MARGIN_BOTTOM: f64 = 38.0;

const PALETTE: [&str; 5] = ["#2563eb", "#16a34a", "#dc2626", "#9333ea", "#ea580c"];

/// 渲染 2×2 面板：三个输入变量加输出变量
///
/// `inputs` 与 `engine.input_variables()` 顺序一致，取夹紧后的
/// 推理输入；输出面板用最终得分做标记。
pub fn render_panels(engine: &InferenceEngine, inputs: &[f64], score: f64) -> String {
    let mut panels = Vec::new();
    for (variable, &marker) in engine.input_variables().iter().zip(inputs) {
        panels.push((variable, marker));
    }
    panels.push((engine.output_variable(), score));

    let columns = 2usize;
    let rows = panels.len().div_ceil(columns);
    let width = PANEL_WIDTH * columns as f64;
    let height = PANEL_HEIGHT * rows as f64;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\" font-family=\"sans-serif\">\n"
    ));
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n");

    for (index, (variable, marker)) in panels.iter().enumerate() {
        let origin_x = (index % columns) as f64 * PANEL_WIDTH;
        let origin_y = (index / columns) as f64 * PANEL_HEIGHT;
        render_panel(&mut svg, variable, *marker, origin_x, origin_y);
    }

    svg.push_str("</svg>\n");
    svg
}

fn render_panel(
    svg: &mut String,
    variable: &LinguisticVariable,
    marker: f64,
    origin_x: f64,
    origin_y: f64,
) {
    let universe = variable.universe();
    let plot_w = PANEL_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = PANEL_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let left = origin_x + MARGIN_LEFT;
    let top = origin_y + MARGIN_TOP;
    let bottom = top + plot_h;

    let to_x = |x: f64| left + (x - universe.min()) / (universe.max() - universe.min()) * plot_w;
    let to_y = |mu: f64| bottom - mu * plot_h;

    // 标题与坐标框
    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"14\" fill=\"#111827\">{} = {:.2}</text>\n",
        left,
        top - 12.0,
        variable.name(),
        marker
    ));
    svg.push_str(&format!(
        "<rect x=\"{left:.1}\" y=\"{top:.1}\" width=\"{plot_w:.1}\" height=\"{plot_h:.1}\" \
         fill=\"none\" stroke=\"#9ca3af\" stroke-width=\"1\"/>\n"
    ));

    // 纵轴刻度 0 / 0.5 / 1
    for tick in [0.0, 0.5, 1.0] {
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"10\" fill=\"#6b7280\" \
             text-anchor=\"end\">{tick:.1}</text>\n",
            left - 6.0,
            to_y(tick) + 3.5
        ));
    }
    // 横轴刻度：论域两端与中点
    let mid = (universe.min() + universe.max()) / 2.0;
    for tick in [universe.min(), mid, universe.max()] {
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"10\" fill=\"#6b7280\" \
             text-anchor=\"middle\">{tick:.0}</text>\n",
            to_x(tick),
            bottom + 14.0
        ));
    }

    // 每个术语一条折线
    for (term_index, term) in variable.terms().iter().enumerate() {
        let color = PALETTE[term_index % PALETTE.len()];
        let mut points = String::new();
        for &x in universe.points() {
            let mu = term.curve().evaluate(x);
            points.push_str(&format!("{:.1},{:.1} ", to_x(x), to_y(mu)));
        }
        svg.push_str(&format!(
            "<polyline points=\"{}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"1.5\"/>\n",
            points.trim_end()
        ));
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"10\" fill=\"{color}\">{}</text>\n",
            left + plot_w - 60.0,
            top + 12.0 + term_index as f64 * 12.0,
            term.name()
        ));
    }

    // 实际值的虚线标记
    let marker_x = to_x(marker.clamp(universe.min(), universe.max()));
    svg.push_str(&format!(
        "<line x1=\"{marker_x:.1}\" y1=\"{top:.1}\" x2=\"{marker_x:.1}\" y2=\"{bottom:.1}\" \
         stroke=\"#111827\" stroke-width=\"1.5\" stroke-dasharray=\"4 3\"/>\n"
    ));
}

/// 图表文件存储
///
/// 文件名带时间戳前缀，字典序即时间序，保留策略直接按名称
/// 排序删除最旧的。
pub struct ChartStore {
    dir: PathBuf,
    max_files: usize,
}

impl ChartStore {
    /// 创建存储目录（幂等）
    pub fn new(config: &ChartConfig) -> std::io::Result<Self> {
        let dir = PathBuf::from(&config.output_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            max_files: config.max_files,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 落盘一张图表并执行保留策略，返回生成的文件名
    pub fn store(&self, svg: &str) -> Result<String> {
        let filename = format!(
            "chart_{}_{}.svg",
            Utc::now().format("%Y%m%d_%H%M%S"),
            Uuid::new_v4()
        );
        fs::write(self.dir.join(&filename), svg)?;
        debug!(%filename, "图表已写入");

        if let Err(e) = self.prune() {
            // 保留策略失败不影响本次请求，只记录告警
            warn!(error = %e, "图表保留策略执行失败");
        }
        Ok(filename)
    }

    /// 读取已存储的图表
    pub fn load(&self, filename: &str) -> Result<Vec<u8>> {
        validate_filename(filename)?;
        match fs::read(self.dir.join(filename)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ServerError::ChartNotFound(filename.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 删除最旧的图表直到数量不超过上限
    fn prune(&self) -> std::io::Result<()> {
        let mut charts: Vec<String> = fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.starts_with("chart_") && name.ends_with(".svg"))
            .collect();
        if charts.len() <= self.max_files {
            return Ok(());
        }

        charts.sort();
        let excess = charts.len() - self.max_files;
        for name in charts.into_iter().take(excess) {
            fs::remove_file(self.dir.join(&name))?;
            debug!(filename = %name, "按保留策略删除旧图表");
        }
        Ok(())
    }
}

/// 文件名只允许服务自己生成的格式，拒绝任何路径穿越
fn validate_filename(filename: &str) -> Result<()> {
    let well_formed = filename.starts_with("chart_")
        && filename.ends_with(".svg")
        && filename
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
        && !filename.contains("..");
    if well_formed {
        Ok(())
    } else {
        Err(ServerError::InvalidChartName(filename.to_string()))
    }
}
