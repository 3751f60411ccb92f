mod modal_flow_tests;
