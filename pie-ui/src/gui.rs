use gpui::{
    App, AppContext, AnyView, Bounds, KeyBinding, Menu, MenuItem, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;
use tracing::info;

use crate::{
    Quit,
    components::{PieChartWindow, WindowPreferences},
    config::AppConfig,
    quit,
};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "Pie Chart".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the fixed-size form window.
pub fn open_main_window(
    config: AppConfig,
    app_cx: &mut App,
) -> anyhow::Result<()> {
    let preferences = WindowPreferences::from(&config.window);
    let bounds = Bounds::centered(None, preferences.size, app_cx);

    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(config.window.title.clone().into()),
            ..Default::default()
        }),
        is_resizable: false,
        ..Default::default()
    };

    app_cx.open_window(options, |window, cx| {
        let view = cx.new(|view_cx| PieChartWindow::new(&config, window, view_cx));
        cx.new(|root_cx| Root::new(AnyView::from(view), window, root_cx))
    })?;

    info!("Main window opened");
    Ok(())
}
