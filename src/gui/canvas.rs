use chrono::Local;
use druid::keyboard_types::Key;
use druid::theme::BACKGROUND_LIGHT;
use druid::BoxConstraints;
use druid::Env;
use druid::Event;
use druid::EventCtx;
use druid::KeyEvent;
use druid::LayoutCtx;
use druid::LifeCycle;
use druid::LifeCycleCtx;
use druid::PaintCtx;
use druid::Size;
use druid::UpdateCtx;
use druid::Widget;
use log::info;

use super::commands::CLEAR_CURSOR;
use super::commands::SAVE_IMAGE;
use super::data::AppData;
use super::plot::Plot;
use crate::mapper::CoordinateMapper;
use crate::mapper::SurfacePosition;
use crate::point::Point;

const DEFAULT_SIDE: f64 = 400.0;

/// Square drawing surface showing the whole data space. Clicking places a
/// point; Ctrl+Z / Ctrl+Shift+Z / Ctrl+Y undo and redo.
pub struct CorrelationCanvas {
    mapper: CoordinateMapper,
    relative_size: f64,
    scale: f64,
}

impl CorrelationCanvas {
    pub fn new(mapper: CoordinateMapper, relative_size: f64) -> Self {
        CorrelationCanvas {
            mapper,
            relative_size,
            scale: 1.0,
        }
    }

    fn plot<'a>(&self, data: &'a AppData, side: f64, cursor: Option<Point>) -> Plot<'a> {
        Plot {
            mapper: self.mapper,
            side,
            history: &data.history,
            cursor,
        }
    }

    fn to_data(&self, pos: druid::Point) -> Point {
        self.mapper
            .to_data(SurfacePosition::new(pos.x, pos.y), self.scale)
    }
}

impl Widget<AppData> for CorrelationCanvas {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut AppData, env: &Env) {
        match event {
            Event::WindowConnected => {
                ctx.request_focus();
            }
            Event::MouseMove(event) => {
                data.cursor = Some(self.to_data(event.pos));
            }
            Event::MouseDown(event) => {
                ctx.request_focus();
                let p = self.to_data(event.pos);
                info!("Placing {}", p);
                let _ = data.history.place(p);
                data.cursor = Some(p);
            }
            Event::KeyDown(KeyEvent {
                key: Key::Character(s),
                mods,
                ..
            }) if mods.ctrl() => match s.to_lowercase().as_str() {
                "z" if mods.shift() => {
                    let _ = data.history.redo();
                }
                "z" => {
                    let _ = data.history.undo();
                }
                "y" => {
                    let _ = data.history.redo();
                }
                _ => {}
            },
            Event::Command(command) if command.is(CLEAR_CURSOR) => {
                data.cursor = None;
            }
            Event::Command(command) if command.is(SAVE_IMAGE) => {
                let side = ctx.size().width;
                let result = self.plot(data, side, None).save_image(
                    &data.export_dir,
                    &env.get(BACKGROUND_LIGHT),
                    Local::now().naive_local(),
                );
                data.report_export(result);
            }
            _ => {}
        }
    }

    fn lifecycle(
        &mut self,
        ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        _data: &AppData,
        _env: &Env,
    ) {
        if let LifeCycle::HotChanged(false) = event {
            ctx.submit_command(CLEAR_CURSOR.to(ctx.widget_id()));
        }
    }

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &AppData, data: &AppData, _env: &Env) {
        if old_data.history != data.history || old_data.cursor != data.cursor {
            ctx.request_paint();
        }
    }

    fn layout(
        &mut self,
        ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &AppData,
        _env: &Env,
    ) -> Size {
        let window = ctx.window().get_size();
        let mut side = window.width.min(window.height) * self.relative_size;
        if !side.is_finite() || side <= 0.0 {
            side = DEFAULT_SIDE;
        }
        let size = bc.constrain(Size::new(side, side));
        let side = size.width.min(size.height);
        self.scale = self.mapper.scale_for_width(side);
        Size::new(side, side)
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &AppData, env: &Env) {
        let side = ctx.size().width;
        self.plot(data, side, data.cursor)
            .paint(ctx.render_ctx, &env.get(BACKGROUND_LIGHT));
    }
}
