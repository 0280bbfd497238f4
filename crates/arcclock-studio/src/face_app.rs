use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use arcclock_engine::core::{App, AppControl, FrameCtx};
use arcclock_engine::paint::Color;
use arcclock_engine::render::shapes::arc::ArcRenderer;
use arcclock_engine::scene::DrawList;
use arcclock_face::{ClockDriver, FrameOutcome, WallClock};

/// Frames between timing reports at `debug` level (about ten seconds at 60 Hz).
const TIMING_LOG_INTERVAL: u64 = 600;

/// Background behind the rings.
const BACKGROUND: Color = Color::from_premul(0.02, 0.02, 0.03, 1.0);

/// Engine app that runs the clock driver each frame and presents its draw list.
pub struct FaceApp<C: WallClock> {
    driver: ClockDriver<C>,
    draw_list: DrawList,
    renderer: ArcRenderer,
}

impl<C: WallClock> FaceApp<C> {
    pub fn new(driver: ClockDriver<C>) -> Self {
        Self {
            driver,
            draw_list: DrawList::new(),
            renderer: ArcRenderer::new(),
        }
    }
}

impl<C: WallClock> App for FaceApp<C> {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            let escape = event.physical_key == PhysicalKey::Code(KeyCode::Escape);
            if escape && event.state == ElementState::Pressed && !self.driver.is_cancelled() {
                log::info!("escape pressed; stopping clock");
                self.driver.cancel_handle().cancel();
            }
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.time.frame_index % TIMING_LOG_INTERVAL == 0 {
            log::debug!("frame {} dt {:.2} ms", ctx.time.frame_index, ctx.time.dt * 1000.0);
        }

        let outcome = self.driver.tick(&mut self.draw_list, &mut || ctx.request_next_frame());

        match outcome {
            FrameOutcome::Drawn(_) => {
                let (draw_list, renderer) = (&self.draw_list, &mut self.renderer);
                ctx.render(BACKGROUND, |rctx, target| renderer.render(rctx, target, draw_list))
            }
            FrameOutcome::Skipped(_) => AppControl::Continue,
            FrameOutcome::Stopped => AppControl::Exit,
        }
    }
}
