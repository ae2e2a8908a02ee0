pub mod arc_fixture;
