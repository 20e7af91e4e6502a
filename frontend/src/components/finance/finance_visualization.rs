use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use shared::{ChartConfig, DetailsType};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::resize_handler::ResizeHandler;
use crate::services::canvas::{CanvasSurface, SurfaceError};

/// Delay before the fade-in starts, so the initial `opacity: 0` is committed first
const FADE_IN_DELAY_MS: u32 = 16;

#[derive(Properties, PartialEq)]
pub struct FinanceVisualizationProps {
    /// Which category the surrounding view is showing; `None` means all
    #[prop_or_default]
    pub details_type: Option<DetailsType>,
    #[prop_or_default]
    pub config: Rc<ChartConfig>,
}

pub enum Msg {
    Resize,
    FadeIn,
}

/// Money in / money out / balance bars on a canvas, dimmed by selection
pub struct FinanceVisualization {
    canvas_ref: NodeRef,
    handler: ResizeHandler<CanvasSurface>,
    resize_listener: Option<EventListener>,
    fade_in: Option<Timeout>,
    visible: bool,
}

impl Component for FinanceVisualization {
    type Message = Msg;
    type Properties = FinanceVisualizationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            handler: ResizeHandler::new(),
            resize_listener: None,
            fade_in: None,
            visible: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Resize => {
                let props = ctx.props();
                let result = self.handler.handle_resize(&props.config, props.details_type);
                report(result);
                false
            }
            Msg::FadeIn => {
                self.fade_in = None;
                self.visible = true;
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.details_type != old_props.details_type || props.config != old_props.config {
            log::debug!("repainting for selection {:?}", props.details_type);
            report(self.handler.repaint(&props.config, props.details_type));
        }
        // Only the fade duration shows up in the markup
        props.config.fade_in_ms != old_props.config.fade_in_ms
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }

        match self.mount_surface() {
            Ok(surface) => self.handler.attach(surface),
            Err(err) => report(Err(err)),
        }

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            self.resize_listener = Some(EventListener::new(&window, "resize", move |_| {
                link.send_message(Msg::Resize);
            }));
        }

        ctx.link().send_message(Msg::Resize);

        let link = ctx.link().clone();
        self.fade_in = Some(Timeout::new(FADE_IN_DELAY_MS, move || {
            link.send_message(Msg::FadeIn);
        }));
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.release();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let style = format!(
            "display: block; width: 100%; height: 100%; opacity: {}; transition: opacity {}ms ease-out;",
            if self.visible { 1 } else { 0 },
            ctx.props().config.fade_in_ms
        );

        html! {
            <canvas
                ref={self.canvas_ref.clone()}
                class="finance-visualization"
                style={style}
            ></canvas>
        }
    }
}

impl FinanceVisualization {
    /// Drop the resize listener and fade-in timer, then detach the surface
    fn release(&mut self) {
        // Dropping the guards removes the listener and cancels the timer
        self.resize_listener = None;
        self.fade_in = None;
        self.handler.teardown();
        log::debug!("finance visualization torn down ({:?})", self.handler.phase());
    }

    fn mount_surface(&self) -> Result<CanvasSurface, SurfaceError> {
        let canvas = self
            .canvas_ref
            .cast::<HtmlCanvasElement>()
            .ok_or(SurfaceError::SurfaceUnavailable)?;
        CanvasSurface::new(canvas)
    }
}

/// A missing canvas or context just means there is nothing to draw yet
fn report(result: Result<(), SurfaceError>) {
    match result {
        Ok(()) => {}
        Err(err) if err.is_transient() => log::debug!("skipping paint: {}", err),
        Err(err) => log::warn!("finance chart paint failed: {}", err),
    }
}
