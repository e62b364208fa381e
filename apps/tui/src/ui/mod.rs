// Rendering for the heatmap viewer

pub mod layout;
pub mod widgets;

use crate::app::App;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use widgets::{heatmap, legend, popup};

const KEY_HELP: &str = "←/→ year  ↑/↓ month  Home/End first/last  Esc hide  q quit";

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let layout = &app.layout;

    render_header(app, f);
    f.render_widget(
        Paragraph::new(heatmap::month_labels()),
        layout.labels,
    );
    f.render_widget(Paragraph::new(heatmap::grid_lines(app)), layout.grid);
    f.render_widget(
        Paragraph::new(heatmap::axis_line(
            &app.chart.years[app.visible_columns()],
            layout.axis.width as usize,
        ))
        .style(Style::default().fg(Color::Gray)),
        layout.axis,
    );
    f.render_widget(
        Paragraph::new(legend::legend_lines(&app.chart.legend, app.chart.options.legend_mode)),
        layout.legend,
    );
    f.render_widget(
        Paragraph::new(KEY_HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        layout.footer,
    );

    popup::render_tooltip(&app.tooltip, f, layout.frame);
}

fn render_header(app: &App, f: &mut Frame<'_>) {
    let header = vec![
        Line::from(Span::styled(
            app.chart.title.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(app.chart.description.clone()),
    ];
    f.render_widget(
        Paragraph::new(header).alignment(Alignment::Center),
        app.layout.header,
    );
}
