use druid::kurbo::Vec2;
use druid::widget::Controller;
use druid::widget::Scroll;
use druid::Env;
use druid::Event;
use druid::EventCtx;
use druid::UpdateCtx;
use druid::Widget;

use super::data::AppData;

/// Scrolls the points list to its end whenever a point is added.
///
/// The new line is only laid out after `update`, so the scroll happens on the
/// following animation frame.
#[derive(Default)]
pub struct FollowLastLine {
    pending: bool,
}

impl<W: Widget<AppData>> Controller<AppData, Scroll<AppData, W>> for FollowLastLine {
    fn event(
        &mut self,
        child: &mut Scroll<AppData, W>,
        ctx: &mut EventCtx,
        event: &Event,
        data: &mut AppData,
        env: &Env,
    ) {
        if let Event::AnimFrame(_) = event {
            if std::mem::take(&mut self.pending) {
                let height = child.child_size().height;
                child.scroll_by(ctx, Vec2::new(0.0, height));
            }
        }
        child.event(ctx, event, data, env);
    }

    fn update(
        &mut self,
        child: &mut Scroll<AppData, W>,
        ctx: &mut UpdateCtx,
        old_data: &AppData,
        data: &AppData,
        env: &Env,
    ) {
        if data.history.active_points().len() > old_data.history.active_points().len() {
            self.pending = true;
            ctx.request_anim_frame();
        }
        child.update(ctx, old_data, data, env);
    }
}
