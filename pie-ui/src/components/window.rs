use gpui::{
    App, AppContext, ClickEvent, Context, Entity, InteractiveElement, IntoElement, ParentElement,
    Render, Styled, Subscription, Window, canvas, div, px,
};
use gpui_component::v_flex;
use pie_core::calculations::ChartLayout;
use pie_core::draw::paint;
use pie_core::{LegendCaptions, RenderState, submit};
use tracing::info;

use crate::components::{ExpenseForm, GpuiCanvas, dialogs::show_warnings, make_button};
use crate::config::AppConfig;

/// Root view: the expense form, the chart button and the drawing surface.
pub struct PieChartWindow {
    _window_close_subscription: Subscription,
    form: Entity<ExpenseForm>,
    state: RenderState,
    captions: LegendCaptions,
    layout: ChartLayout,
}

impl PieChartWindow {
    pub fn new(
        config: &AppConfig,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let subscription = cx.on_window_closed(|cx: &mut App| {
            info!("Window closed callback");
            cx.quit();
        });

        let captions = config.captions.clone();
        let form = cx.new(|form_cx| ExpenseForm::new(&captions, window, form_cx));

        info!("Window constructed");
        Self {
            _window_close_subscription: subscription,
            form,
            state: RenderState::hidden(),
            captions,
            layout: config.layout(),
        }
    }

    fn on_show_chart(
        &mut self,
        _: &ClickEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let input = self.form.read(cx).to_input(cx);
        let outcome = submit(&input);

        let blocking = outcome
            .warnings
            .iter()
            .filter(|w| w.blocks_rendering())
            .count();
        info!(
            shown = outcome.is_shown(),
            warnings = outcome.warnings.len(),
            blocking,
            "Chart button handled"
        );
        show_warnings(&outcome.warnings);

        self.state = outcome.state;
        if outcome.repaint {
            cx.notify();
        }
    }
}

impl Render for PieChartWindow {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let state = self.state;
        let captions = self.captions.clone();
        let layout = self.layout;

        div()
            .id("pie-chart-window")
            .size_full()
            .relative()
            .child(
                canvas(
                    |_bounds, _window, _cx| {},
                    move |bounds, (), window, cx| {
                        let mut surface = GpuiCanvas::new(bounds.origin, window, cx);
                        paint(&mut surface, &state, &captions, &layout);
                    },
                )
                .absolute()
                .top_0()
                .left_0()
                .size_full(),
            )
            .child(
                v_flex()
                    .absolute()
                    .top(px(40.))
                    .left(px(40.))
                    .gap_4()
                    .child(self.form.clone())
                    .child(make_button(
                        "show-chart",
                        "Show Pie Chart",
                        cx.listener(Self::on_show_chart),
                    )),
            )
    }
}
