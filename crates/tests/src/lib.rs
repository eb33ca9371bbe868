//! # Integration Tests
//!
//! 集成测试与端到端测试。
//!
//! 负责：
//! - 合约冒烟测试（跨 crate 的 gauge 目录一致性）
//! - 端到端会话测试（字节流 → 导出文本，无需接收机）
//! - 文件字节源回放

#[cfg(test)]
mod contract_tests {
    use contracts::{
        DecodeOutcome, FixData, Frame, MetricSink, PositionData, Record, SatelliteInfo,
        SentenceKind,
    };
    use observability::GaugeStore;

    #[test]
    fn test_one_record_per_consumed_kind() {
        let frames = [
            (
                "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n",
                SentenceKind::Gga,
            ),
            (
                "$GPGSA,A,3,04,05,09,12,24,25,29,,,,,,1.2,0.9,0.8*31\r\n",
                SentenceKind::Gsa,
            ),
            (
                "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n",
                SentenceKind::Rmc,
            ),
        ];

        for (text, kind) in frames {
            match decoder::decode(&Frame::from(text)) {
                DecodeOutcome::Decoded(record) => assert_eq!(record.kind(), kind),
                other => panic!("expected Decoded for {text:?}, got {other:?}"),
            }
        }
    }

    /// 每个 dispatch 写入的 gauge 名必须出现在目录里，标签形状一致
    #[test]
    fn test_every_written_gauge_is_in_catalog() {
        let store = GaugeStore::new();
        let records = [
            Record::Fix(FixData { altitude: 1.0 }),
            Record::Satellites(SatelliteInfo {
                used: 4,
                pdop: 2.5,
                hdop: 1.3,
                vdop: 2.1,
            }),
            Record::Position(PositionData {
                active: true,
                latitude: 1.0,
                longitude: 2.0,
                speed: 3.0,
                variation: 4.0,
                track: 5.0,
            }),
        ];

        for record in &records {
            dispatcher::apply(record, &store);
        }

        for (key, _) in store.snapshot().iter() {
            let spec = dispatcher::gauges::CATALOG
                .iter()
                .find(|spec| spec.name == key.name)
                .unwrap_or_else(|| panic!("gauge {} written but not in catalog", key.name));
            assert_eq!(
                spec.label.is_some(),
                key.label.is_some(),
                "label shape mismatch for {}",
                key.name
            );
        }
    }
}

#[cfg(test)]
mod e2e_tests {
    use contracts::{DecodeOutcome, MetricSink, StreamError};
    use ingestion::FrameReader;
    use observability::GaugeStore;
    use tokio::io::AsyncRead;

    /// 把一整段字节会话推过 framing → decode → dispatch
    async fn ingest<R: AsyncRead + Unpin>(source: R, store: &GaugeStore) -> StreamError {
        let mut reader = FrameReader::new(source);
        loop {
            match reader.next_frame().await {
                Ok(frame) => {
                    if let DecodeOutcome::Decoded(record) = decoder::decode(&frame) {
                        dispatcher::apply(&record, store);
                    }
                }
                Err(e) => return e,
            }
        }
    }

    /// One sentence of each consumed kind, all fields populated
    const SESSION: &[u8] = b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n\
                             $GPGSA,A,3,04,05,09,12,24,25,29,,,,,,1.2,0.9,0.8*31\r\n\
                             $GPRMC,081836,A,3730.0000,N,12218.0000,W,5.1,231.8,130625,004.2,E*66\r\n";

    #[tokio::test]
    async fn test_session_renders_full_exposition() {
        let store = GaugeStore::new();
        dispatcher::register_gauges(&store);

        let err = ingest(SESSION, &store).await;
        assert!(matches!(err, StreamError::Exhausted));

        let text = observability::render(
            &store.snapshot(),
            dispatcher::gauges::NAMESPACE,
            &dispatcher::gauges::CATALOG,
        );
        assert_eq!(
            text,
            "# HELP gps_altitude_meters Current altitude in meters\n\
             # TYPE gps_altitude_meters gauge\n\
             gps_altitude_meters 545.4\n\
             # HELP gps_dilution_of_precision Current dilution of precision\n\
             # TYPE gps_dilution_of_precision gauge\n\
             gps_dilution_of_precision{type=\"horizontal\"} 0.9\n\
             gps_dilution_of_precision{type=\"position\"} 1.2\n\
             gps_dilution_of_precision{type=\"vertical\"} 0.8\n\
             # HELP gps_latitude_dd Current latitude in decimal degrees\n\
             # TYPE gps_latitude_dd gauge\n\
             gps_latitude_dd 37.5\n\
             # HELP gps_longitude_dd Current longitude in decimal degrees\n\
             # TYPE gps_longitude_dd gauge\n\
             gps_longitude_dd -122.3\n\
             # HELP gps_satellite_count Number of satellites currently used for fix\n\
             # TYPE gps_satellite_count gauge\n\
             gps_satellite_count 7\n\
             # HELP gps_speed_knots Current speed in knots\n\
             # TYPE gps_speed_knots gauge\n\
             gps_speed_knots 5.1\n\
             # HELP gps_track_degtrue Track angle in degrees True\n\
             # TYPE gps_track_degtrue gauge\n\
             gps_track_degtrue 231.8\n\
             # HELP gps_variation_dd Current variation in decimal degrees\n\
             # TYPE gps_variation_dd gauge\n\
             gps_variation_dd 4.2\n"
        );
    }

    #[tokio::test]
    async fn test_startup_exposition_has_zeroed_scalars_only() {
        let store = GaugeStore::new();
        dispatcher::register_gauges(&store);

        let text = observability::render(
            &store.snapshot(),
            dispatcher::gauges::NAMESPACE,
            &dispatcher::gauges::CATALOG,
        );

        assert_eq!(text.matches("# TYPE").count(), 7);
        assert!(text.contains("gps_satellite_count 0\n"));
        assert!(text.contains("gps_latitude_dd 0\n"));
        // DOP 族在第一次写入前不出现
        assert!(!text.contains("dilution_of_precision"));
    }

    #[tokio::test]
    async fn test_void_session_freezes_position_gauges() {
        let session: &[u8] =
            b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n\
              $GPRMC,081837,V,3730.0000,N,12218.0000,W,0.0,231.8,130625,004.2,E*74\r\n";

        let store = GaugeStore::new();
        let err = ingest(session, &store).await;
        assert!(matches!(err, StreamError::Exhausted));

        // the void sentence decodes fine but the active values stay put
        let snapshot = store.snapshot();
        assert!((snapshot.scalar("latitude_dd") - 48.1173).abs() < 1e-6);
        assert_eq!(snapshot.scalar("speed_knots"), 22.4);
        assert_eq!(snapshot.scalar("track_degtrue"), 84.4);
        assert_eq!(snapshot.scalar("variation_dd"), -3.1);
    }

    #[tokio::test]
    async fn test_file_source_scraped_over_http() {
        use observability::{ExporterConfig, MetricsServer};
        use poem::http::Uri;
        use poem::{Endpoint, Request};

        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, SESSION).unwrap();

        let store = GaugeStore::new();
        dispatcher::register_gauges(&store);

        let source = tokio::fs::File::open(file.path()).await.unwrap();
        let err = ingest(source, &store).await;
        assert!(matches!(err, StreamError::Exhausted));

        let app = MetricsServer::new(
            store,
            &dispatcher::gauges::CATALOG,
            ExporterConfig::default(),
        )
        .routes();
        let resp = app
            .get_response(Request::builder().uri(Uri::from_static("/metrics")).finish())
            .await;

        let body = resp.into_body().into_string().await.unwrap();
        assert!(body.contains("gps_altitude_meters 545.4\n"));
        assert!(body.contains("gps_satellite_count 7\n"));
        assert!(body.contains("gps_longitude_dd -122.3\n"));
    }

    #[tokio::test]
    async fn test_torn_file_halts_ingestion() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n\
              $GPRMC,081836,A,37",
        )
        .unwrap();

        let store = GaugeStore::new();
        let source = tokio::fs::File::open(file.path()).await.unwrap();
        let err = ingest(source, &store).await;

        assert!(matches!(err, StreamError::TruncatedFrame { bytes: 18 }));
        // the complete frame before the tear still landed
        assert_eq!(store.snapshot().scalar("altitude_meters"), 545.4);
    }
}

#[cfg(test)]
mod exporter_tests {
    use contracts::MetricSink;
    use observability::{ExporterConfig, GaugeStore, MetricsServer, CONTENT_TYPE};
    use poem::http::{StatusCode, Uri};
    use poem::{Endpoint, Request};

    fn scrape() -> Request {
        Request::builder()
            .uri(Uri::from_static("/metrics"))
            .finish()
    }

    #[tokio::test]
    async fn test_scrape_reflects_live_gauges() {
        let store = GaugeStore::new();
        dispatcher::register_gauges(&store);

        let app = MetricsServer::new(
            store.clone(),
            &dispatcher::gauges::CATALOG,
            ExporterConfig::default(),
        )
        .routes();

        let before = app.get_response(scrape()).await;
        assert_eq!(before.status(), StatusCode::OK);
        let body = before.into_body().into_string().await.unwrap();
        assert!(body.contains("gps_satellite_count 0\n"));
        assert!(!body.contains("dilution_of_precision"));

        // a write between scrapes shows up without touching the server
        store.set_scalar("satellite_count", 9.0);
        store.set_labeled("dilution_of_precision", ("type", "position"), 1.2);

        let after = app.get_response(scrape()).await;
        assert_eq!(
            after.content_type().map(str::to_string),
            Some(CONTENT_TYPE.to_string())
        );
        let body = after.into_body().into_string().await.unwrap();
        assert!(body.contains("gps_satellite_count 9\n"));
        assert!(body.contains("gps_dilution_of_precision{type=\"position\"} 1.2\n"));
    }

    #[tokio::test]
    async fn test_only_telemetry_path_is_served() {
        let app = MetricsServer::new(
            GaugeStore::new(),
            &dispatcher::gauges::CATALOG,
            ExporterConfig::default(),
        )
        .routes();

        for path in ["/", "/health", "/metrics/extra"] {
            let resp = app
                .get_response(Request::builder().uri(path.parse().unwrap()).finish())
                .await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "path {path}");
        }
    }
}
