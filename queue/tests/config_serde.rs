use fibre_queue::{BlockingQueue, BuildError, QueueBuilder, QueueConfig};

#[test]
fn config_from_json() {
  let config: QueueConfig = serde_json::from_str(r#"{ "capacity": 16, "name": "ingest" }"#).unwrap();
  assert_eq!(
    config,
    QueueConfig {
      capacity: 16,
      name: Some("ingest".to_string()),
    }
  );

  let queue: BlockingQueue<u32> = QueueBuilder::from_config(&config).build().unwrap();
  assert_eq!(queue.capacity(), 16);
  assert_eq!(queue.name(), Some("ingest"));
}

#[test]
fn config_name_is_optional() {
  let config: QueueConfig = serde_json::from_str(r#"{ "capacity": 2 }"#).unwrap();
  assert_eq!(config.name, None);
}

#[test]
fn config_zero_capacity_fails_to_build() {
  let config: QueueConfig = serde_json::from_str(r#"{ "capacity": 0 }"#).unwrap();
  let err = QueueBuilder::<u32>::from_config(&config).build().unwrap_err();
  assert_eq!(err, BuildError::ZeroCapacity);
}

#[test]
fn config_round_trips_through_json() {
  let config = QueueConfig {
    capacity: 4,
    name: None,
  };
  let json = serde_json::to_string(&config).unwrap();
  assert_eq!(serde_json::from_str::<QueueConfig>(&json).unwrap(), config);
}
