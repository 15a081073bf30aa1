pub mod mock_handler;
