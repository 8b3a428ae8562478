use gpui::{
    AppContext, App, Context, Div, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, TextAlign, Window, div, px,
};
use gpui_component::{
    h_flex,
    input::{Input, InputState},
    v_flex,
};
use pie_core::{ExpenseCategory, ExpenseFormInput, LegendCaptions};

/// The four expense text fields with their captions.
///
/// Fields accept free text; validation happens on submit so that bad
/// entries can be reported to the user.
pub struct ExpenseForm {
    captions: LegendCaptions,
    bills: Entity<InputState>,
    gas: Entity<InputState>,
    entertainment: Entity<InputState>,
    groceries: Entity<InputState>,
}

impl ExpenseForm {
    pub fn new(
        captions: &LegendCaptions,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        Self {
            captions: captions.clone(),
            bills: make_amount_input(window, cx),
            gas: make_amount_input(window, cx),
            entertainment: make_amount_input(window, cx),
            groceries: make_amount_input(window, cx),
        }
    }

    fn field(
        &self,
        category: ExpenseCategory,
    ) -> &Entity<InputState> {
        match category {
            ExpenseCategory::Bills => &self.bills,
            ExpenseCategory::Gas => &self.gas,
            ExpenseCategory::Entertainment => &self.entertainment,
            ExpenseCategory::Groceries => &self.groceries,
        }
    }

    /// Current text of the four fields.
    pub fn to_input(
        &self,
        cx: &App,
    ) -> ExpenseFormInput {
        let text = |category| self.field(category).read(cx).value().to_string();

        ExpenseFormInput::new(
            text(ExpenseCategory::Bills),
            text(ExpenseCategory::Gas),
            text(ExpenseCategory::Entertainment),
            text(ExpenseCategory::Groceries),
        )
    }
}

impl Render for ExpenseForm {
    fn render(
        &mut self,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        v_flex()
            .gap_2()
            .w(px(420.))
            .child(make_labeled_row("Enter your monthly expenses:"))
            .children(ExpenseCategory::ALL.map(|category| {
                make_input_row(
                    self.field(category),
                    format!("{}: $", self.captions.get(category)),
                )
            }))
    }
}

fn make_amount_input(
    window: &mut Window,
    cx: &mut Context<ExpenseForm>,
) -> Entity<InputState> {
    cx.new(|closure_cx| InputState::new(window, closure_cx).placeholder("0.00"))
}

fn make_input_row(
    state: &Entity<InputState>,
    input_label: impl Into<SharedString>,
) -> Div {
    make_labeled_row(input_label).child(Input::new(state).flex_grow())
}

/// Common container and right-aligned label for every form row.
fn make_labeled_row(label: impl Into<SharedString>) -> Div {
    h_flex()
        .items_center()
        .gap_5()
        .p(px(2.))
        .child(
            div()
                .min_w(px(150.))
                .text_align(TextAlign::Right)
                .child(label.into()),
        )
}
