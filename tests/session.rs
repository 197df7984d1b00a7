use fractal_zoom::{
    BufferedRasterSink, CliController, Colour, ColourMap, ColourMapKinds, ExplorerConfig,
    ExplorerSession, FractalAlgorithm, FractalError, FractalKinds, GeometryError,
    HueCycleColourMap, IterationResult, LatestFramePresenter, ParameterError, Point,
    PpmFilePresenter, RenderError, RenderStrategy, ViewedRegion,
};

fn config(size: u32) -> ExplorerConfig {
    ExplorerConfig {
        display_size: size,
        ..ExplorerConfig::default()
    }
}

fn session(config: &ExplorerConfig) -> ExplorerSession<BufferedRasterSink<LatestFramePresenter>> {
    let sink = BufferedRasterSink::new(config.geometry().unwrap(), LatestFramePresenter::default());
    ExplorerSession::new(config, sink).unwrap()
}

fn latest_pixel(
    session: &ExplorerSession<BufferedRasterSink<LatestFramePresenter>>,
    x: i32,
    y: i32,
) -> Colour {
    session
        .sink()
        .presenter()
        .frame()
        .unwrap()
        .pixel(Point { x, y })
        .unwrap()
}

#[test]
fn test_initial_mandelbrot_frame() {
    let mut session = session(&config(4));

    let stats = session.render().unwrap();

    let first_escape = HueCycleColourMap::default()
        .map(IterationResult::Escaped(1))
        .unwrap();

    assert_eq!(stats.pixels, 16);
    assert_eq!(session.sink().frames_presented(), 1);
    // (0, 0) is c = -2-2i, (2, 2) is the origin
    assert_eq!(latest_pixel(&session, 0, 0), first_escape);
    assert_eq!(latest_pixel(&session, 2, 2), Colour::BLACK);
}

#[test]
fn test_click_recentres_and_halves_region() {
    let mut session = session(&config(4));
    session.render().unwrap();

    session.click(Point { x: 2, y: 2 }).unwrap();

    assert_eq!(
        session.region(),
        ViewedRegion::new(-1.0, -1.0, 2.0, 2.0).unwrap()
    );
    assert_eq!(session.sink().frames_presented(), 2);
}

#[test]
fn test_click_off_display_changes_nothing() {
    let mut session = session(&config(4));
    session.render().unwrap();
    let before = session.region();

    let result = session.click(Point { x: 4, y: 0 });

    assert!(matches!(
        result,
        Err(RenderError::Fractal(FractalError::InvalidParameter(
            ParameterError::PointOutsideDisplay { .. }
        )))
    ));
    assert_eq!(session.region(), before);
    assert_eq!(session.sink().frames_presented(), 1);
}

#[test]
fn test_select_rule_shows_initial_region() {
    let mut session = session(&config(4));
    session.click(Point { x: 1, y: 1 }).unwrap();

    session.select_rule(FractalKinds::BurningShip).unwrap();

    assert_eq!(session.rule().kind(), FractalKinds::BurningShip);
    assert_eq!(session.region(), session.rule().initial_region());
}

#[test]
fn test_reset_returns_to_initial_region() {
    let mut session = session(&config(8));
    session.click(Point { x: 6, y: 1 }).unwrap();
    session.click(Point { x: 3, y: 3 }).unwrap();

    session.reset().unwrap();

    assert_eq!(session.region(), ViewedRegion::new(-2.0, -2.0, 4.0, 4.0).unwrap());
}

#[test]
fn test_serial_and_parallel_frames_match() {
    let serial = ExplorerConfig {
        fractal: FractalKinds::Julia,
        ..config(16)
    };
    let parallel = ExplorerConfig {
        strategy: RenderStrategy::Parallel,
        ..serial
    };

    let mut a = session(&serial);
    let mut b = session(&parallel);
    a.render().unwrap();
    b.render().unwrap();

    assert_eq!(a.sink().buffer().buffer(), b.sink().buffer().buffer());
}

#[test]
fn test_colour_map_from_config() {
    let config = ExplorerConfig {
        colour_map: ColourMapKinds::BlueWhiteGradient,
        ..config(4)
    };

    let session = session(&config);

    assert_eq!(
        session.renderer().colour_map().kind(),
        ColourMapKinds::BlueWhiteGradient
    );
}

#[test]
fn test_zoom_underflow_keeps_region() {
    let config = ExplorerConfig {
        zoom_scale: 1e-200,
        ..config(4)
    };
    let mut session = session(&config);

    session.click(Point { x: 2, y: 2 }).unwrap();
    let before = session.region();
    let result = session.click(Point { x: 2, y: 2 });

    assert!(matches!(
        result,
        Err(RenderError::Fractal(FractalError::InvalidGeometry(
            GeometryError::InvalidRegion { .. }
        )))
    ));
    assert_eq!(session.region(), before);
}

#[test]
fn test_cli_run_replays_clicks() {
    let mut controller = CliController::new(&config(4), LatestFramePresenter::default()).unwrap();

    let report = controller
        .run(&[Point { x: 2, y: 2 }, Point { x: 2, y: 2 }])
        .unwrap();

    assert_eq!(report.frames, 3);
    assert_eq!(report.region, ViewedRegion::new(-0.5, -0.5, 1.0, 1.0).unwrap());
    assert_eq!(controller.session().sink().presenter().presented(), 3);
}

#[test]
fn test_cli_run_writes_ppm() {
    let path = std::env::temp_dir()
        .join(format!("fractal_zoom_{}", std::process::id()))
        .join("frame.ppm");
    let mut controller = CliController::new(&config(3), PpmFilePresenter::new(&path)).unwrap();

    controller.run(&[]).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let header = b"P6\n3 3\n255\n";
    assert_eq!(&bytes[..header.len()], header);
    assert_eq!(bytes.len(), header.len() + 27);

    std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
}
