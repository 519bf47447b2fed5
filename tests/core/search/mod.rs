// Search pipeline tests
