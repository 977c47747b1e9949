mod canvas;
mod commands;
mod data;
mod plot;
mod scroll;

use druid::widget::Button;
use druid::widget::CrossAxisAlignment;
use druid::widget::Flex;
use druid::widget::Label;
use druid::widget::LineBreaking;
use druid::widget::Scroll;
use druid::Application;
use druid::Insets;
use druid::Widget;
use druid::WidgetExt;
use log::info;

use crate::config::Config;
use crate::formatting::correlation_text;
use crate::formatting::cursor_text;
use crate::formatting::regression_text;

use self::canvas::CorrelationCanvas;
use self::commands::SAVE_IMAGE;
use self::scroll::FollowLastLine;

pub use self::data::AppData;

fn guarded_button(
    text: &str,
    action: impl Fn(&mut AppData) + 'static,
    enabled: impl Fn(&AppData) -> bool + 'static,
) -> impl Widget<AppData> {
    Button::new(text)
        .on_click(move |_ctx, data: &mut AppData, _env| action(data))
        .disabled_if(move |data: &AppData, _| !enabled(data))
}

pub fn build_toplevel_widget(config: &Config) -> impl Widget<AppData> {
    let can_undo = |data: &AppData| data.history.can_undo();
    let can_redo = |data: &AppData| data.history.can_redo();

    let buttons = Flex::row()
        .with_child(guarded_button(
            "Undo",
            |data| {
                let _ = data.history.undo();
            },
            can_undo,
        ))
        .with_spacer(5.0)
        .with_child(guarded_button(
            "Redo",
            |data| {
                let _ = data.history.redo();
            },
            can_redo,
        ))
        .with_spacer(5.0)
        .with_child(guarded_button(
            "Undo all",
            |data| {
                let _ = data.history.undo_all();
            },
            can_undo,
        ))
        .with_spacer(5.0)
        .with_child(guarded_button(
            "Redo all",
            |data| {
                let _ = data.history.redo_all();
            },
            can_redo,
        ));

    let export_buttons = Flex::row()
        .with_child(guarded_button(
            "Copy points",
            |data| {
                Application::global()
                    .clipboard()
                    .put_string(data.points_text());
                info!("Copied {} points", data.history.active_points().len());
            },
            can_undo,
        ))
        .with_spacer(5.0)
        .with_child(Button::new("Save points").on_click(
            |_ctx, data: &mut AppData, _env| data.save_points(),
        ))
        .with_spacer(5.0)
        .with_child(
            Button::new("Save image")
                .on_click(|ctx, _data: &mut AppData, _env| ctx.submit_command(SAVE_IMAGE)),
        );

    let statistics = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(Label::dynamic(|data: &AppData, _| {
            format!("r = {}", correlation_text(&data.history.regression_snapshot()))
        }))
        .with_child(Label::dynamic(|data: &AppData, _| {
            regression_text(&data.history.regression_snapshot())
        }))
        .with_child(Label::dynamic(|data: &AppData, _| {
            format!("n = {}", data.history.active_points().len())
        }))
        .with_child(Label::dynamic(|data: &AppData, _| cursor_text(data.cursor)));

    let points = Scroll::new(
        Label::dynamic(|data: &AppData, _| data.points_text())
            .with_line_break_mode(LineBreaking::WordWrap),
    )
    .vertical()
    .controller(FollowLastLine::default())
    .expand_height();

    let side_panel = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(statistics)
        .with_spacer(10.0)
        .with_child(buttons)
        .with_spacer(5.0)
        .with_child(export_buttons)
        .with_child(Label::dynamic(|data: &AppData, _| data.status.clone()))
        .with_spacer(10.0)
        .with_flex_child(points, 1.0)
        .padding(Insets::uniform(8.0));

    let canvas = CorrelationCanvas::new(config.mapper(), config.canvas_relative_size);

    Flex::row()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(canvas.padding(Insets::uniform(8.0)))
        .with_flex_child(side_panel, 1.0)
}
