use super::common::assert_fixture_pair;

#[test]
fn service_name_without_stack_prefix_and_image_with_tag() {
  assert_fixture_pair("service_name_1");
  assert_fixture_pair("service_name_2");
}

#[test]
fn container_labels() {
  assert_fixture_pair("labels_1");
}

#[test]
fn deploy_labels() {
  assert_fixture_pair("labels_2");
}

#[test]
fn overlay_networks() {
  assert_fixture_pair("networks_1");
}

#[test]
fn external_networks() {
  assert_fixture_pair("networks_2");
}

#[test]
fn every_attached_network_is_listed() {
  // The api service is attached to two networks; both must survive.
  assert_fixture_pair("networks_3");
}

#[test]
fn environment_variables() {
  assert_fixture_pair("environment_1");
}

#[test]
fn placement_constraints() {
  assert_fixture_pair("constraints_1");
}

#[test]
fn bind_mounts() {
  assert_fixture_pair("volumes_1");
}

#[test]
fn stack_volumes() {
  assert_fixture_pair("volumes_2");
}

#[test]
fn external_volumes() {
  assert_fixture_pair("volumes_3");
}

#[test]
fn ports_in_long_syntax() {
  assert_fixture_pair("ports_1");
}

#[test]
fn replicated_and_global_mode() {
  assert_fixture_pair("mode_1");
}
